//! Leptos Tilt Utilities
//!
//! Pointer-driven parallax tilt for Leptos using mouse events.
//! Purely decorative: the pose is recomputed from the pointer position on
//! every move and reset when the pointer leaves.

use leptos::html;
use leptos::prelude::*;

/// Tilt parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Maximum rotation around the X axis, in degrees
    pub max_angle_x: f64,
    /// Maximum rotation around the Y axis, in degrees
    pub max_angle_y: f64,
    /// Scale applied while hovering
    pub scale: f64,
    pub glare_enable: bool,
    /// Opacity of the glare at its brightest (0.0 - 1.0)
    pub glare_max_opacity: f64,
    /// Transition duration for transform changes
    pub transition_speed_ms: u32,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_x: 20.0,
            max_angle_y: 20.0,
            scale: 1.0,
            glare_enable: false,
            glare_max_opacity: 0.7,
            transition_speed_ms: 400,
            perspective_px: 1000.0,
        }
    }
}

/// Element bounds in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Computed tilt pose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub glare_opacity: f64,
    /// Direction of the glare gradient, in degrees
    pub glare_angle: f64,
}

impl TiltPose {
    /// Resting pose (pointer outside the element)
    pub const fn rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            glare_opacity: 0.0,
            glare_angle: 0.0,
        }
    }

    /// CSS `transform` value for this pose
    pub fn transform(&self, perspective_px: f64) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s},{s},{s})",
            perspective_px,
            self.rotate_x,
            self.rotate_y,
            s = self.scale,
        )
    }
}

impl Default for TiltPose {
    fn default() -> Self {
        Self::rest()
    }
}

/// Map a pointer position to a pose.
///
/// The pointer is expressed as a percentage offset from the element centre
/// (-100 at the left/top edge, 100 at the right/bottom edge) and clamped, so
/// positions outside the element produce the maximum angle rather than more.
pub fn pose_for_pointer(config: &TiltConfig, bounds: &Bounds, client_x: f64, client_y: f64) -> TiltPose {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return TiltPose::rest();
    }

    let x_pct = (((client_x - bounds.left) / bounds.width) * 200.0 - 100.0).clamp(-100.0, 100.0);
    let y_pct = (((client_y - bounds.top) / bounds.height) * 200.0 - 100.0).clamp(-100.0, 100.0);

    let glare_opacity = if config.glare_enable {
        config.glare_max_opacity * ((100.0 - y_pct) / 200.0)
    } else {
        0.0
    };

    TiltPose {
        // Pointed edge dips away from the viewer
        rotate_x: -y_pct * config.max_angle_x / 100.0,
        rotate_y: x_pct * config.max_angle_y / 100.0,
        scale: config.scale,
        glare_opacity,
        glare_angle: x_pct.atan2(-y_pct).to_degrees(),
    }
}

/// Tilt state signals
#[derive(Clone, Copy)]
pub struct TiltSignals {
    pub pose_read: ReadSignal<TiltPose>,
    pub pose_write: WriteSignal<TiltPose>,
}

pub fn create_tilt_signals() -> TiltSignals {
    let (pose_read, pose_write) = signal(TiltPose::rest());
    TiltSignals { pose_read, pose_write }
}

/// Create mousemove handler that tracks the pointer over `target`
pub fn make_on_mousemove(
    tilt: TiltSignals,
    target: NodeRef<html::Div>,
    config: TiltConfig,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(el) = target.get_untracked() else { return };
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        tilt.pose_write.set(pose_for_pointer(&config, &bounds, f64::from(ev.client_x()), f64::from(ev.client_y())));
    }
}

/// Create mouseleave handler (back to rest)
pub fn make_on_mouseleave(tilt: TiltSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        tilt.pose_write.set(TiltPose::rest());
    }
}

fn glare_style(pose: TiltPose) -> String {
    format!(
        "position: absolute; inset: 0; pointer-events: none; border-radius: inherit; \
         background: linear-gradient({:.1}deg, rgba(255, 255, 255, {:.3}) 0%, rgba(255, 255, 255, 0) 80%);",
        pose.glare_angle, pose.glare_opacity,
    )
}

/// Wraps children in a tilting container
#[component]
pub fn Tilt(
    config: TiltConfig,
    #[prop(optional, into)] class: String,
    /// Extra inline style for the wrapper (e.g. animation delay)
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let tilt = create_tilt_signals();
    let target = NodeRef::<html::Div>::new();

    let wrapper_style = move || {
        format!(
            "{}transform: {}; transition: transform {}ms cubic-bezier(.03,.98,.52,.99); transform-style: preserve-3d; will-change: transform; position: relative;",
            style,
            tilt.pose_read.get().transform(config.perspective_px),
            config.transition_speed_ms,
        )
    };

    view! {
        <div
            node_ref=target
            class=class
            style=wrapper_style
            on:mousemove=make_on_mousemove(tilt, target, config)
            on:mouseleave=make_on_mouseleave(tilt)
        >
            {children()}
            <Show when=move || config.glare_enable>
                <div class="tilt-glare" aria-hidden="true" style=move || glare_style(tilt.pose_read.get())></div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds { left: 100.0, top: 50.0, width: 200.0, height: 100.0 }
    }

    fn config() -> TiltConfig {
        TiltConfig {
            max_angle_x: 12.0,
            max_angle_y: 12.0,
            scale: 1.03,
            glare_enable: true,
            glare_max_opacity: 0.15,
            transition_speed_ms: 250,
            perspective_px: 1000.0,
        }
    }

    #[test]
    fn test_centre_is_flat() {
        let pose = pose_for_pointer(&config(), &bounds(), 200.0, 100.0);
        assert_eq!(pose.rotate_x, 0.0);
        assert_eq!(pose.rotate_y, 0.0);
        assert_eq!(pose.scale, 1.03);
    }

    #[test]
    fn test_edges_reach_max_angle() {
        let top_right = pose_for_pointer(&config(), &bounds(), 300.0, 50.0);
        assert!((top_right.rotate_x - 12.0).abs() < 1e-9);
        assert!((top_right.rotate_y - 12.0).abs() < 1e-9);
        assert!((top_right.glare_opacity - 0.15).abs() < 1e-9);

        let bottom_left = pose_for_pointer(&config(), &bounds(), 100.0, 150.0);
        assert!((bottom_left.rotate_x + 12.0).abs() < 1e-9);
        assert!((bottom_left.rotate_y + 12.0).abs() < 1e-9);
        assert!(bottom_left.glare_opacity.abs() < 1e-9);
    }

    #[test]
    fn test_outside_pointer_is_clamped() {
        let pose = pose_for_pointer(&config(), &bounds(), 10_000.0, -10_000.0);
        assert!((pose.rotate_x - 12.0).abs() < 1e-9);
        assert!((pose.rotate_y - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_bounds_rest() {
        let empty = Bounds { left: 0.0, top: 0.0, width: 0.0, height: 10.0 };
        assert_eq!(pose_for_pointer(&config(), &empty, 5.0, 5.0), TiltPose::rest());
    }

    #[test]
    fn test_glare_disabled() {
        let cfg = TiltConfig { glare_enable: false, ..config() };
        let pose = pose_for_pointer(&cfg, &bounds(), 100.0, 50.0);
        assert_eq!(pose.glare_opacity, 0.0);
    }

    #[test]
    fn test_transform_css() {
        let css = TiltPose::rest().transform(1000.0);
        assert_eq!(css, "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale3d(1,1,1)");
    }
}
