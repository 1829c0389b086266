//! Mesh Emitters
//!
//! CPU-side geometry generation for the editor scene: flat-shaded boxes
//! for walls and floors, a cone-and-shaft arrow for the cursor, a ground
//! quad, and the grid helper line set. All emitters append into a shared
//! batch that is re-uploaded whenever scene content changes.

use glam::{Vec3, Vec4};
use crate::render::{Mesh, Vertex};

use super::building::BoxDescriptor;

/// Append an axis-aligned box with per-face normals (24 vertices,
/// 36 indices).
pub fn append_box(mesh: &mut Mesh, desc: &BoxDescriptor, color: Vec4) {
    let c = desc.center;
    let h = desc.size * 0.5;
    let color = color.to_array();

    // (normal, four corners counter-clockwise seen from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Y,
            [
                Vec3::new(-h.x, h.y, -h.z),
                Vec3::new(-h.x, h.y, h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(h.x, h.y, -h.z),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(h.x, -h.y, -h.z),
                Vec3::new(h.x, -h.y, h.z),
                Vec3::new(-h.x, -h.y, h.z),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(h.x, -h.y, -h.z),
                Vec3::new(h.x, h.y, -h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(h.x, -h.y, h.z),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(-h.x, -h.y, h.z),
                Vec3::new(-h.x, h.y, h.z),
                Vec3::new(-h.x, h.y, -h.z),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-h.x, -h.y, h.z),
                Vec3::new(h.x, -h.y, h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(-h.x, h.y, h.z),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(-h.x, h.y, -h.z),
                Vec3::new(h.x, h.y, -h.z),
                Vec3::new(h.x, -h.y, -h.z),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u32;
        for corner in corners {
            mesh.vertices
                .push(Vertex::new((c + corner).to_array(), normal.to_array(), color));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Append an upward-facing quad in the XZ plane.
pub fn append_quad_xz(mesh: &mut Mesh, center: Vec3, half_x: f32, half_z: f32, color: Vec4) {
    let base = mesh.vertices.len() as u32;
    let color = color.to_array();
    let normal = Vec3::Y.to_array();

    let corners = [
        Vec3::new(center.x - half_x, center.y, center.z - half_z),
        Vec3::new(center.x - half_x, center.y, center.z + half_z),
        Vec3::new(center.x + half_x, center.y, center.z + half_z),
        Vec3::new(center.x + half_x, center.y, center.z - half_z),
    ];
    for corner in corners {
        mesh.vertices.push(Vertex::new(corner.to_array(), normal, color));
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Append a downward-pointing cone (apex below the base ring).
pub fn append_cone(
    mesh: &mut Mesh,
    apex: Vec3,
    base_y: f32,
    radius: f32,
    segments: u32,
    color: Vec4,
) {
    let color = color.to_array();
    let segments = segments.max(3);

    for i in 0..segments {
        let a0 = std::f32::consts::TAU * i as f32 / segments as f32;
        let a1 = std::f32::consts::TAU * (i + 1) as f32 / segments as f32;

        let p0 = Vec3::new(apex.x + radius * a0.cos(), base_y, apex.z + radius * a0.sin());
        let p1 = Vec3::new(apex.x + radius * a1.cos(), base_y, apex.z + radius * a1.sin());

        // Flat-shaded side face; normal from the triangle itself
        let normal = (p1 - apex).cross(p0 - apex).normalize_or_zero().to_array();

        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new(apex.to_array(), normal, color));
        mesh.vertices.push(Vertex::new(p0.to_array(), normal, color));
        mesh.vertices.push(Vertex::new(p1.to_array(), normal, color));
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

/// Append a vertical open-ended cylinder between two heights.
pub fn append_cylinder(
    mesh: &mut Mesh,
    center: Vec3,
    y_bottom: f32,
    y_top: f32,
    radius: f32,
    segments: u32,
    color: Vec4,
) {
    let color = color.to_array();
    let segments = segments.max(3);

    for i in 0..segments {
        let a0 = std::f32::consts::TAU * i as f32 / segments as f32;
        let a1 = std::f32::consts::TAU * (i + 1) as f32 / segments as f32;

        let n0 = Vec3::new(a0.cos(), 0.0, a0.sin());
        let n1 = Vec3::new(a1.cos(), 0.0, a1.sin());
        let b0 = Vec3::new(center.x + radius * n0.x, y_bottom, center.z + radius * n0.z);
        let b1 = Vec3::new(center.x + radius * n1.x, y_bottom, center.z + radius * n1.z);
        let t0 = Vec3::new(b0.x, y_top, b0.z);
        let t1 = Vec3::new(b1.x, y_top, b1.z);

        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new(b0.to_array(), n0.to_array(), color));
        mesh.vertices.push(Vertex::new(b1.to_array(), n1.to_array(), color));
        mesh.vertices.push(Vertex::new(t1.to_array(), n1.to_array(), color));
        mesh.vertices.push(Vertex::new(t0.to_array(), n0.to_array(), color));
        mesh.indices
            .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }
}

/// Build the grid helper as line-list vertex pairs: `line_count` lines
/// along each axis, one world unit apart, centered on the origin.
///
/// Lines sit just above the ground quad so they are not depth-rejected.
pub fn grid_lines(line_count: u32, color: Vec4) -> Vec<Vertex> {
    let color = color.to_array();
    let normal = Vec3::Y.to_array();
    let half = (line_count.saturating_sub(1)) as f32 / 2.0;
    let y = 0.01;

    let mut vertices = Vec::with_capacity(line_count as usize * 4);
    for i in 0..line_count {
        let offset = i as f32 - half;
        // Line parallel to X
        vertices.push(Vertex::new([-half, y, offset], normal, color));
        vertices.push(Vertex::new([half, y, offset], normal, color));
        // Line parallel to Z
        vertices.push(Vertex::new([offset, y, -half], normal, color));
        vertices.push(Vertex::new([offset, y, half], normal, color));
    }
    vertices
}
