//! Instance types for 2D circle rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One filled circle, laid out for a GPU instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    /// Padding keeps `color` 16-byte aligned for uniform/storage layouts
    pub _pad: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn new(center: Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.color[3]
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
        let instances = [CircleInstance::new(Vec2::new(1.0, 2.0), 3.0, colors::PLAYER)];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 32);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[..3], &[1.0, 2.0, 3.0]);
    }
}
