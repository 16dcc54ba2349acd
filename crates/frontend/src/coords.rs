use crate::viewer::Point;

/// Convert client (viewport) coordinates to container-relative pixel coordinates.
pub fn client_to_container(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}

/// Container-relative position of a client point, using the live bounding rect
/// of the element with `container_id`.
pub fn container_point(client_x: f64, client_y: f64, container_id: &str) -> Option<Point> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();
    Some(client_to_container(client_x, client_y, rect.left(), rect.top()))
}
