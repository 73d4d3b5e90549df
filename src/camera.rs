use nalgebra::{Isometry3, Perspective3};

use crate::math::{Point3, Ray, Vec3, Vec4};

/// Pixel dimensions of the surface rays are cast through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    /// Minimised windows report a zero size; they are treated as 1x1.
    pub fn new(width: usize, height: usize) -> Viewport {
        Viewport {
            width: width.max(1),
            height: height.max(1),
        }
    }
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Fly camera. Angles are in degrees; yaw -90 with zero pitch looks down -z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub yaw: f32,
    pub pitch: f32,
    /// vertical field of view
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// units per second
    pub speed: f32,
    /// degrees per second
    pub turn_speed: f32,
}

pub const MAX_PITCH: f32 = 89.0;

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Point3::origin(),
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            speed: 2.5,
            turn_speed: 60.0,
        }
    }
}

impl Camera {
    pub fn at(position: Point3) -> Camera {
        Camera {
            position,
            ..Camera::default()
        }
    }

    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(&Vec3::y()).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(&self.front()).normalize()
    }

    /// World to eye transform.
    pub fn view(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.position, &(self.position + self.front()), &Vec3::y())
    }

    pub fn projection(&self, aspect_ratio: f32) -> Perspective3<f32> {
        Perspective3::new(aspect_ratio, self.fov.to_radians(), self.near, self.far)
    }

    pub fn advance(&mut self, movement: Movement, dt: f32) {
        let step = self.speed * dt;
        let offset = match movement {
            Movement::Forward => self.front() * step,
            Movement::Backward => -self.front() * step,
            Movement::Right => self.right() * step,
            Movement::Left => -self.right() * step,
            Movement::Up => Vec3::y() * step,
            Movement::Down => -Vec3::y() * step,
        };
        self.position += offset;
    }

    /// Turns by the given fractions of `turn_speed`; pitch stays within +-89 degrees.
    pub fn turn(&mut self, yaw_input: f32, pitch_input: f32, dt: f32) {
        self.yaw += yaw_input * self.turn_speed * dt;
        self.pitch = (self.pitch + pitch_input * self.turn_speed * dt).clamp(-MAX_PITCH, MAX_PITCH);
    }
}

/// World space ray through pixel `(x, y)`, measured from the top-left corner.
///
/// The pixel is lifted to clip space on the near plane, unprojected to eye
/// space, pointed into the screen, then carried to world space with the
/// inverse view transform. The ray starts at the camera position.
pub fn ray_from_screen(x: f32, y: f32, viewport: Viewport, camera: &Camera) -> Ray {
    let ndc_x = (2.0 * x) / viewport.width as f32 - 1.0;
    let ndc_y = 1.0 - (2.0 * y) / viewport.height as f32;
    let clip = Vec4::new(ndc_x, ndc_y, -1.0, 1.0);

    let eye = camera.projection(viewport.aspect_ratio()).inverse() * clip;
    let eye = Vec4::new(eye.x, eye.y, -1.0, 0.0);

    let world = camera.view().inverse().to_homogeneous() * eye;
    Ray::new(camera.position, world.xyz().normalize())
}
