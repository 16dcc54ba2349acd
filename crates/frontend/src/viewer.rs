//! Pan / zoom / selection state for the interactive city map.
//!
//! Everything here is plain data so it can be driven by DOM events in the
//! component and by unit tests alike. Offsets and pointer positions are in
//! container-relative CSS pixels; marker positions are percentages of the
//! map image.

use portfolio_shared::models::City;

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;
/// Additive step used by the wheel and by the zoom buttons.
pub const ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// `translate(offset) scale(scale)` applied to the image layer, origin at its top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewTransform {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewTransform {
    /// Layer coordinate currently shown under a container point.
    pub fn screen_to_image(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.offset_x) / self.scale,
            y: (p.y - self.offset_y) / self.scale,
        }
    }

    #[cfg(test)]
    fn image_to_screen(&self, p: Point) -> Point {
        Point {
            x: p.x * self.scale + self.offset_x,
            y: p.y * self.scale + self.offset_y,
        }
    }

    /// Inline style for the transformed layer. The short ease is dropped while
    /// dragging so the map tracks the pointer exactly.
    pub fn css(&self, dragging: bool) -> String {
        let transition = if dragging {
            "none"
        } else {
            "transform 0.1s ease-out"
        };
        format!(
            "transform: translate({}px, {}px) scale({}); transform-origin: 0 0; transition: {};",
            self.offset_x, self.offset_y, self.scale, transition
        )
    }
}

/// A pointer-like input sample. Touch samples carry the number of active
/// touch points; only single-finger touches pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Mouse { x: f64, y: f64 },
    Touch { x: f64, y: f64, touches: usize },
}

impl PointerInput {
    fn position(&self) -> Option<Point> {
        match *self {
            PointerInput::Mouse { x, y } => Some(Point { x, y }),
            PointerInput::Touch { x, y, touches: 1 } => Some(Point { x, y }),
            PointerInput::Touch { .. } => None,
        }
    }
}

/// What a pointer-down landed on. Markers take priority over the viewport:
/// a press on a marker never starts a pan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Marker(String),
    Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Backdrop,
    CloseButton,
    EscapeKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapViewer {
    transform: ViewTransform,
    /// `pointer - offset` captured at drag start; `Some` while dragging.
    drag_anchor: Option<Point>,
    hovered: Option<String>,
    selected: Option<City>,
}

impl MapViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&City> {
        self.selected.as_ref()
    }

    // --- Zoom ---

    /// Step the scale by one wheel notch, keeping the layer point under
    /// `pointer` fixed. A positive `delta_y` zooms out. Returns whether the
    /// transform changed.
    pub fn wheel(&mut self, delta_y: f64, pointer: Point) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let step = if delta_y > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        let old = self.transform;
        let new_scale = clamp_scale(old.scale + step);
        if new_scale == old.scale {
            return false;
        }

        let ratio = new_scale / old.scale;
        self.transform = ViewTransform {
            scale: new_scale,
            offset_x: pointer.x - (pointer.x - old.offset_x) * ratio,
            offset_y: pointer.y - (pointer.y - old.offset_y) * ratio,
        };
        true
    }

    /// Button zoom: scale only, offset untouched.
    pub fn zoom_in(&mut self) {
        self.transform.scale = clamp_scale(self.transform.scale + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.transform.scale = clamp_scale(self.transform.scale - ZOOM_STEP);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.transform.scale < MAX_SCALE
    }

    pub fn can_zoom_out(&self) -> bool {
        self.transform.scale > MIN_SCALE
    }

    /// Rounded percentage for the zoom readout.
    pub fn zoom_percent(&self) -> i32 {
        (self.transform.scale * 100.0).round() as i32
    }

    pub fn reset(&mut self) {
        self.transform = ViewTransform::default();
    }

    // --- Drag ---

    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, input: PointerInput, target: HitTarget) -> bool {
        if let HitTarget::Marker(_) = target {
            return false;
        }
        let Some(p) = input.position() else {
            return false;
        };
        self.drag_anchor = Some(Point {
            x: p.x - self.transform.offset_x,
            y: p.y - self.transform.offset_y,
        });
        true
    }

    /// Returns whether the offset moved.
    pub fn pointer_move(&mut self, input: PointerInput) -> bool {
        let (Some(anchor), Some(p)) = (self.drag_anchor, input.position()) else {
            return false;
        };
        self.transform.offset_x = p.x - anchor.x;
        self.transform.offset_y = p.y - anchor.y;
        true
    }

    /// Mouse up, mouse leave and touch end all finish the drag.
    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    // --- Markers ---

    pub fn hover_enter(&mut self, id: &str) {
        self.hovered = Some(id.to_string());
    }

    /// Only clears when leaving the marker that is currently hovered.
    pub fn hover_leave(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    /// Replaces any open record wholesale.
    pub fn select(&mut self, city: City) {
        self.selected = Some(city);
    }

    /// Every dismissal path ends in the same state. Returns whether a record was open.
    pub fn dismiss(&mut self, _reason: DismissReason) -> bool {
        self.selected.take().is_some()
    }
}

fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Inline position for a marker: percentages of the image, centred on the point.
pub fn marker_style(city: &City) -> String {
    format!("left: {}%; top: {}%;", city.x, city.y)
}

/// Render data for one marker button.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub city: City,
    pub style: String,
    pub hovered: bool,
}

/// Markers in input order.
pub fn marker_views(cities: &[City], viewer: &MapViewer) -> Vec<MarkerView> {
    cities
        .iter()
        .map(|c| MarkerView {
            city: c.clone(),
            style: marker_style(c),
            hovered: viewer.is_hovered(&c.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn city(id: &str, name: &str, x: f64, y: f64) -> City {
        City {
            id: id.to_string(),
            name: name.to_string(),
            x,
            y,
            banner_image: format!("{}.jpg", id),
            description: format!("About {}", name),
            ruler: format!("Ruler of {}", name),
            ideology: "Mercantile".to_string(),
            date_first_visited: "01/01/2024".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn mouse(x: f64, y: f64) -> PointerInput {
        PointerInput::Mouse { x, y }
    }

    fn viewer_at(scale: f64, offset_x: f64, offset_y: f64) -> MapViewer {
        MapViewer {
            transform: ViewTransform {
                scale,
                offset_x,
                offset_y,
            },
            ..MapViewer::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let v = MapViewer::new();
        assert_eq!(v.transform(), ViewTransform::default());
        assert!(!v.is_dragging());
        assert!(v.selected().is_none());
        assert_eq!(v.zoom_percent(), 100);
    }

    // --- Zoom bounds ---

    #[test]
    fn test_wheel_scale_stays_in_bounds() {
        let mut v = MapViewer::new();
        for _ in 0..50 {
            v.wheel(-120.0, Point::new(300.0, 200.0));
            let s = v.transform().scale;
            assert!((MIN_SCALE..=MAX_SCALE).contains(&s));
        }
        assert!((v.transform().scale - MAX_SCALE).abs() < EPS);
        assert!(!v.can_zoom_in());

        for _ in 0..50 {
            v.wheel(120.0, Point::new(10.0, 700.0));
            let s = v.transform().scale;
            assert!((MIN_SCALE..=MAX_SCALE).contains(&s));
        }
        assert!((v.transform().scale - MIN_SCALE).abs() < EPS);
        assert!(!v.can_zoom_out());
    }

    #[test]
    fn test_wheel_direction() {
        let mut v = MapViewer::new();
        assert!(v.wheel(53.0, Point::new(0.0, 0.0)));
        assert!((v.transform().scale - 0.8).abs() < EPS);
        assert!(v.wheel(-3.0, Point::new(0.0, 0.0)));
        assert!((v.transform().scale - 1.0).abs() < EPS);
    }

    #[test]
    fn test_wheel_zero_delta_is_noop() {
        let mut v = viewer_at(1.4, 12.0, -8.0);
        let before = v.clone();
        assert!(!v.wheel(0.0, Point::new(50.0, 50.0)));
        assert_eq!(v, before);
    }

    #[test]
    fn test_wheel_at_limit_leaves_offset_alone() {
        let mut v = viewer_at(MAX_SCALE, 40.0, 25.0);
        assert!(!v.wheel(-100.0, Point::new(500.0, 300.0)));
        assert_eq!(v.transform(), viewer_at(MAX_SCALE, 40.0, 25.0).transform());
    }

    // --- Pointer-anchored zoom ---

    #[test]
    fn test_wheel_keeps_point_under_pointer() {
        let starts = [
            (1.0, 0.0, 0.0),
            (0.7, -120.0, 45.5),
            (2.2, 310.0, -980.25),
            (MIN_SCALE, 5.0, 5.0),
        ];
        let pointers = [
            Point::new(0.0, 0.0),
            Point::new(512.0, 384.0),
            Point::new(-20.0, 1000.0),
        ];
        for &(scale, ox, oy) in &starts {
            for &p in &pointers {
                for delta in [-1.0, 1.0] {
                    let mut v = viewer_at(scale, ox, oy);
                    let before = v.transform().screen_to_image(p);
                    v.wheel(delta, p);
                    let after = v.transform().screen_to_image(p);
                    assert!((before.x - after.x).abs() < 1e-6, "{:?} {:?}", before, after);
                    assert!((before.y - after.y).abs() < 1e-6, "{:?} {:?}", before, after);
                }
            }
        }
    }

    #[test]
    fn test_screen_image_inverse() {
        let t = ViewTransform {
            scale: 1.8,
            offset_x: -33.0,
            offset_y: 71.0,
        };
        let p = Point::new(250.0, 125.0);
        let back = t.image_to_screen(t.screen_to_image(p));
        assert!((back.x - p.x).abs() < EPS);
        assert!((back.y - p.y).abs() < EPS);
    }

    // --- Buttons ---

    #[test]
    fn test_zoom_buttons_keep_offset() {
        let mut v = viewer_at(1.0, 80.0, -15.0);
        v.zoom_in();
        assert!((v.transform().scale - 1.2).abs() < EPS);
        assert_eq!(v.transform().offset_x, 80.0);
        assert_eq!(v.zoom_percent(), 120);
        v.zoom_out();
        v.zoom_out();
        assert!((v.transform().scale - 0.8).abs() < EPS);
        assert_eq!(v.transform().offset_y, -15.0);
    }

    #[test]
    fn test_zoom_buttons_clamp() {
        let mut v = MapViewer::new();
        for _ in 0..20 {
            v.zoom_in();
        }
        assert_eq!(v.transform().scale, MAX_SCALE);
        assert_eq!(v.zoom_percent(), 300);
        for _ in 0..20 {
            v.zoom_out();
        }
        assert_eq!(v.transform().scale, MIN_SCALE);
        assert_eq!(v.zoom_percent(), 50);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut v = viewer_at(2.6, -400.0, 1234.5);
        v.hover_enter("a");
        v.select(city("a", "Vell", 10.0, 10.0));
        v.reset();
        assert_eq!(
            v.transform(),
            ViewTransform {
                scale: 1.0,
                offset_x: 0.0,
                offset_y: 0.0
            }
        );
        assert!(v.selected().is_some());
    }

    // --- Drag ---

    #[test]
    fn test_drag_translates_by_pointer_delta() {
        let mut v = viewer_at(1.6, 30.0, -20.0);
        assert!(v.pointer_down(mouse(100.0, 100.0), HitTarget::Viewport));
        assert!(v.is_dragging());
        v.pointer_move(mouse(130.0, 80.0));
        v.pointer_move(mouse(175.0, 60.5));
        v.pointer_up();
        assert!(!v.is_dragging());

        let t = v.transform();
        assert_eq!(t.offset_x, 30.0 + (175.0 - 100.0));
        assert_eq!(t.offset_y, -20.0 + (60.5 - 100.0));
        assert_eq!(t.scale, 1.6);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut v = viewer_at(1.0, 5.0, 5.0);
        assert!(!v.pointer_move(mouse(400.0, 400.0)));
        assert_eq!(v.transform().offset_x, 5.0);
    }

    #[test]
    fn test_marker_press_never_pans() {
        let mut v = viewer_at(1.2, 10.0, 20.0);
        let before = v.transform();
        assert!(!v.pointer_down(mouse(50.0, 50.0), HitTarget::Marker("a".to_string())));
        assert!(!v.pointer_move(mouse(250.0, 300.0)));
        v.pointer_up();
        assert_eq!(v.transform(), before);
        assert!(!v.is_dragging());
    }

    #[test]
    fn test_single_touch_drags_like_mouse() {
        let mut v = MapViewer::new();
        let touch = |x, y| PointerInput::Touch { x, y, touches: 1 };
        assert!(v.pointer_down(touch(10.0, 10.0), HitTarget::Viewport));
        v.pointer_move(touch(60.0, -40.0));
        v.pointer_up();
        assert_eq!(v.transform().offset_x, 50.0);
        assert_eq!(v.transform().offset_y, -50.0);
    }

    #[test]
    fn test_multi_touch_is_ignored() {
        let mut v = MapViewer::new();
        let two = |x, y| PointerInput::Touch { x, y, touches: 2 };
        assert!(!v.pointer_down(two(10.0, 10.0), HitTarget::Viewport));
        assert!(!v.is_dragging());

        let one = |x, y| PointerInput::Touch { x, y, touches: 1 };
        v.pointer_down(one(0.0, 0.0), HitTarget::Viewport);
        assert!(!v.pointer_move(two(90.0, 90.0)));
        assert_eq!(v.transform().offset_x, 0.0);
    }

    #[test]
    fn test_drag_after_zoom_uses_current_offset() {
        let mut v = MapViewer::new();
        v.wheel(-1.0, Point::new(200.0, 100.0));
        let t = v.transform();
        v.pointer_down(mouse(0.0, 0.0), HitTarget::Viewport);
        v.pointer_move(mouse(7.0, 3.0));
        assert!((v.transform().offset_x - (t.offset_x + 7.0)).abs() < EPS);
        assert!((v.transform().offset_y - (t.offset_y + 3.0)).abs() < EPS);
    }

    // --- Hover / select / dismiss ---

    #[test]
    fn test_hover_leave_only_clears_matching() {
        let mut v = MapViewer::new();
        v.hover_enter("a");
        v.hover_enter("b");
        v.hover_leave("a");
        assert_eq!(v.hovered(), Some("b"));
        v.hover_leave("b");
        assert_eq!(v.hovered(), None);
    }

    #[test]
    fn test_selecting_another_marker_replaces_record() {
        let mut v = MapViewer::new();
        let a = city("a", "Vell", 10.0, 20.0);
        let mut b = city("b", "Ostra", 70.0, 35.0);
        b.ruler = "Nobody".to_string();

        v.select(a);
        v.select(b.clone());
        assert_eq!(v.selected(), Some(&b));
    }

    #[test]
    fn test_every_dismissal_is_equivalent() {
        for reason in [
            DismissReason::Backdrop,
            DismissReason::CloseButton,
            DismissReason::EscapeKey,
        ] {
            let mut v = viewer_at(2.0, -50.0, 75.0);
            v.select(city("a", "Vell", 10.0, 20.0));
            let transform = v.transform();
            assert!(v.dismiss(reason));
            assert!(v.selected().is_none());
            assert_eq!(v.transform(), transform);
            assert!(!v.dismiss(reason));
        }
    }

    #[test]
    fn test_selection_and_drag_are_independent() {
        let mut v = MapViewer::new();
        v.select(city("a", "Vell", 10.0, 20.0));
        v.pointer_down(mouse(0.0, 0.0), HitTarget::Viewport);
        v.pointer_move(mouse(10.0, 10.0));
        assert!(v.selected().is_some());
        v.dismiss(DismissReason::EscapeKey);
        assert!(v.is_dragging());
        assert_eq!(v.transform().offset_x, 10.0);
    }

    // --- Rendering helpers ---

    #[test]
    fn test_no_markers_renders_nothing_extra() {
        let v = MapViewer::new();
        assert!(marker_views(&[], &v).is_empty());
        assert!(v.selected().is_none());
    }

    #[test]
    fn test_marker_views_follow_input_order() {
        let mut v = MapViewer::new();
        v.hover_enter("b");
        let cities = vec![city("b", "Ostra", 70.0, 35.5), city("a", "Vell", 0.0, 100.0)];
        let views = marker_views(&cities, &v);
        assert_eq!(views[0].city.id, "b");
        assert_eq!(views[0].city.name, "Ostra");
        assert!(views[0].hovered);
        assert_eq!(views[0].style, "left: 70%; top: 35.5%;");
        assert!(!views[1].hovered);
        assert_eq!(views[1].style, "left: 0%; top: 100%;");
    }

    #[test]
    fn test_transform_css() {
        let t = ViewTransform {
            scale: 1.2,
            offset_x: -10.5,
            offset_y: 4.0,
        };
        assert_eq!(
            t.css(false),
            "transform: translate(-10.5px, 4px) scale(1.2); transform-origin: 0 0; transition: transform 0.1s ease-out;"
        );
        assert!(t.css(true).ends_with("transition: none;"));
    }
}
