//! End-to-end pipeline tests: parse, drag, shade, order, emit.

use polyview_core::{
    parse_mesh, CanvasPoint, CanvasProjection, InteractionController, PaintOp, RenderOptions,
    SHADE_HIGH, SHADE_LOW,
};

/// Space-separated, zero-indexed flavor of the cube description.
const CUBE: &str = "\
8 6
0 -1 -1 -1
1  1 -1 -1
2  1  1 -1
3 -1  1 -1
4 -1 -1  1
5  1 -1  1
6  1  1  1
7 -1  1  1
0 3 2 1
4 5 6 7
0 1 5 4
2 3 7 6
1 2 6 5
3 0 4 7
";

fn projection() -> CanvasProjection {
    CanvasProjection::for_canvas(80.0, 40.0, 2.0)
}

#[test]
fn cube_parses_and_renders_every_face() {
    let mesh = parse_mesh(CUBE).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 6);

    let controller = InteractionController::new(0.05);
    let frame = controller.render_frame(&mesh, &projection(), &RenderOptions::default());
    assert_eq!(frame.len(), 6);
    assert!(frame.iter().all(|op| matches!(op, PaintOp::Polygon { .. })));
}

#[test]
fn cube_frame_is_ordered_back_to_front() {
    let mesh = parse_mesh(CUBE).unwrap();
    let records = polyview_core::painter::face_records(&mesh, &projection());
    for pair in records.windows(2) {
        assert!(pair[0].depth <= pair[1].depth);
    }
    // The z = -1 quad is declared first and the z = +1 quad second.
    assert_eq!(records.first().unwrap().face, 0);
    assert_eq!(records.last().unwrap().face, 1);
}

#[test]
fn cube_faces_shade_by_orientation() {
    let mesh = parse_mesh(CUBE).unwrap();
    let records = polyview_core::painter::face_records(&mesh, &projection());
    for record in &records {
        match record.face {
            // Quads square to the viewing axis.
            0 | 1 => assert_eq!(record.color, SHADE_HIGH),
            // Side quads are edge-on.
            _ => assert_eq!(record.color, SHADE_LOW),
        }
    }
}

#[test]
fn drag_rotates_and_reversing_restores() {
    let mut mesh = parse_mesh(CUBE).unwrap();
    let mut controller = InteractionController::new(0.05);
    let base = mesh.base_vertices().clone();

    controller.pointer_down(40.0, 20.0);
    assert!(controller.pointer_move(50.0, 20.0, &mut mesh));
    let moved = mesh
        .current_vertices()
        .iter()
        .any(|(id, p)| (*p - base[id]).norm() > 1e-6);
    assert!(moved);

    // Retrace a single-axis gesture; the recomposed yaws cancel exactly.
    assert!(controller.pointer_move(40.0, 20.0, &mut mesh));
    controller.pointer_up();
    for (id, p) in mesh.current_vertices() {
        assert!((*p - base[id]).norm() < 1e-9);
    }
}

#[test]
fn move_without_press_renders_nothing_new() {
    let mut mesh = parse_mesh(CUBE).unwrap();
    let mut controller = InteractionController::new(0.05);
    let before = mesh.current_vertices().clone();
    assert!(!controller.pointer_move(10.0, 10.0, &mut mesh));
    assert_eq!(mesh.current_vertices(), &before);
}

#[test]
fn spinning_about_the_view_axis_keeps_near_face_bright() {
    let mut mesh = parse_mesh(CUBE).unwrap();
    let rotation = polyview_core::axis_rotation(polyview_core::Axis::Z, 0.7);
    let rotated =
        polyview_core::apply(mesh.base_vertices(), &rotation, mesh.centroid());
    mesh.set_current_vertices(rotated);

    let records = polyview_core::painter::face_records(&mesh, &projection());
    let near = records.iter().find(|r| r.face == 1).unwrap();
    assert_eq!(near.color, SHADE_HIGH);
    assert!((near.depth - 1.0).abs() < 1e-9);
}

#[test]
fn markers_follow_their_faces() {
    let mesh = parse_mesh(CUBE).unwrap();
    let controller = InteractionController::new(0.05);
    let options = RenderOptions {
        vertex_markers: true,
    };
    let frame = controller.render_frame(&mesh, &projection(), &options);
    // One polygon and four corner markers per quad.
    assert_eq!(frame.len(), 6 * 5);
    let polygons = frame
        .iter()
        .filter(|op| matches!(op, PaintOp::Polygon { .. }))
        .count();
    assert_eq!(polygons, 6);
}

#[test]
fn projection_centers_the_cube() {
    let mesh = parse_mesh(CUBE).unwrap();
    let records = polyview_core::painter::face_records(&mesh, &projection());
    // Outline points of the near face straddle the canvas center.
    let near = records.iter().find(|r| r.face == 1).unwrap();
    let mean_x: f64 =
        near.outline.iter().map(|p| p.x).sum::<f64>() / near.outline.len() as f64;
    let mean_y: f64 =
        near.outline.iter().map(|p| p.y).sum::<f64>() / near.outline.len() as f64;
    assert!((mean_x - 40.0).abs() < 1e-9);
    assert!((mean_y - 20.0).abs() < 1e-9);
    assert_eq!(
        near.outline.first().copied(),
        Some(CanvasPoint { x: 20.0, y: 10.0 })
    );
}
