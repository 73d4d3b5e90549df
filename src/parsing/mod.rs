mod primitives;

use std::{fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::PrimitiveData;
use primitives::point;

use crate::{
    camera::Camera,
    math::{RGBColor, Vec3},
    scene::{Scene, Spin},
    Error,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraData {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub turn_speed: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        let camera = Camera::default();
        CameraData {
            position: [camera.position.x, camera.position.y, camera.position.z],
            yaw: camera.yaw,
            pitch: camera.pitch,
            fov: camera.fov,
            near: camera.near,
            far: camera.far,
            speed: camera.speed,
            turn_speed: camera.turn_speed,
        }
    }
}

impl From<CameraData> for Camera {
    fn from(data: CameraData) -> Self {
        Camera {
            position: point(data.position),
            yaw: data.yaw,
            pitch: data.pitch,
            fov: data.fov,
            near: data.near,
            far: data.far,
            speed: data.speed,
            turn_speed: data.turn_speed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinData {
    pub axis: [f32; 3],
    pub degrees_per_second: f32,
}

impl From<SpinData> for Spin {
    fn from(data: SpinData) -> Self {
        Spin {
            axis: Vec3::new(data.axis[0], data.axis[1], data.axis[2]),
            degrees_per_second: data.degrees_per_second,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub camera: CameraData,
    #[serde(default = "default_background")]
    pub background: [f32; 3],
    #[serde(default)]
    pub spin: Option<SpinData>,
    #[serde(default = "default_movable")]
    pub movable_camera: bool,
    pub primitives: Vec<PrimitiveData>,
}

fn default_background() -> [f32; 3] {
    [0.3, 0.3, 0.3]
}

fn default_movable() -> bool {
    true
}

impl SceneData {
    /// A red sphere in front of a fixed camera at the origin.
    pub fn sphere_demo() -> SceneData {
        SceneData {
            camera: CameraData::default(),
            background: default_background(),
            spin: None,
            movable_camera: false,
            primitives: vec![PrimitiveData::Sphere {
                center: [0.0, 0.0, -2.2],
                radius: 0.7,
                color: [1.0, 0.0, 0.0],
            }],
        }
    }

    /// A spinning cube at the origin, seen from a movable camera.
    pub fn cube_demo() -> SceneData {
        SceneData {
            camera: CameraData {
                position: [0.0, 0.0, 3.0],
                ..CameraData::default()
            },
            background: default_background(),
            spin: Some(SpinData {
                axis: [0.5, 1.0, 0.0],
                degrees_per_second: 50.0,
            }),
            movable_camera: true,
            primitives: vec![PrimitiveData::Cube {
                center: [0.0, 0.0, 0.0],
                side: 1.0,
                color: [0.2, 0.6, 1.0],
            }],
        }
    }

    pub fn build(self) -> Result<(Scene, Camera), Error> {
        if let Some(index) = self.primitives.iter().position(|p| !p.is_valid()) {
            return Err(Error::InvalidPrimitive {
                index,
                reason: "size must be positive and finite".to_string(),
            });
        }
        let camera = Camera::from(self.camera);
        if !(camera.near > 0.0 && camera.far > camera.near && camera.fov > 0.0 && camera.fov < 180.0) {
            return Err(Error::InvalidCamera(format!(
                "need 0 < near < far and 0 < fov < 180, got near {} far {} fov {}",
                camera.near, camera.far, camera.fov
            )));
        }
        let shapes = self
            .primitives
            .into_iter()
            .map(PrimitiveData::transform)
            .collect::<Vec<_>>();
        let mut scene = Scene::new(shapes, RGBColor::from(self.background));
        scene.spin = self.spin.map(Spin::from);
        Ok((scene, camera))
    }
}

pub fn load_json<T, P>(path: P) -> Result<T, Error>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut input = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut input))
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Primitive, Shape};
    use crate::math::Point3;

    const EXAMPLE: &str = r#"{
        "camera": { "position": [0, 1, 3], "fov": 60 },
        "spin": { "axis": [0, 1, 0], "degrees_per_second": 30 },
        "primitives": [
            { "type": "Sphere", "center": [0, 0, -2.2], "radius": 0.7, "color": [1, 0, 0] },
            { "type": "Cube", "center": [1, 0, 0], "side": 0.5 }
        ]
    }"#;

    #[test]
    fn test_parse_example_scene() {
        let data: SceneData = serde_json::from_str(EXAMPLE).expect("failed to parse scene");
        assert_eq!(data.background, [0.3, 0.3, 0.3]);
        assert_eq!(data.camera.near, 0.1);
        assert!(data.movable_camera);

        let (scene, camera) = data.build().expect("failed to build scene");
        assert_eq!(camera.position, Point3::new(0.0, 1.0, 3.0));
        assert_eq!(camera.fov, 60.0);
        assert_eq!(camera.yaw, -90.0);
        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.spin.map(|s| s.degrees_per_second), Some(30.0));
        match scene.shapes[1] {
            Shape::Cube(cube) => {
                assert_eq!(cube.side, 0.5);
                assert_eq!(cube.color(), RGBColor::WHITE);
            }
            _ => panic!("expected a cube"),
        }
    }

    #[test]
    fn test_builtin_scenes() {
        let (scene, camera) = SceneData::sphere_demo().build().unwrap();
        assert_eq!(camera, Camera::default());
        assert_eq!(scene.shapes.len(), 1);
        assert_eq!(scene.shapes[0].center(), Point3::new(0.0, 0.0, -2.2));
        assert!(scene.spin.is_none());

        let (scene, camera) = SceneData::cube_demo().build().unwrap();
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 3.0));
        assert_eq!(scene.shapes[0].get_name(), "Cube");
        assert!(scene.spin.is_some());
    }

    #[test]
    fn test_builtin_scene_json_round_trip() {
        for data in [SceneData::sphere_demo(), SceneData::cube_demo()] {
            let json = serde_json::to_string_pretty(&data).unwrap();
            let back: SceneData = serde_json::from_str(&json).unwrap();
            assert_eq!(back, data);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        let unknown = r#"{ "primitives": [ { "type": "Torus", "center": [0, 0, 0] } ] }"#;
        assert!(serde_json::from_str::<SceneData>(unknown).is_err());

        let negative = r#"{ "primitives": [ { "type": "Sphere", "center": [0, 0, 0], "radius": -1 } ] }"#;
        let data: SceneData = serde_json::from_str(negative).unwrap();
        match data.build() {
            Err(Error::InvalidPrimitive { index, .. }) => assert_eq!(index, 0),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }

        let mut data = SceneData::sphere_demo();
        data.camera.near = 0.0;
        assert!(matches!(data.build(), Err(Error::InvalidCamera(_))));
    }

    #[test]
    fn test_load_json_from_disk() {
        let path = std::env::temp_dir().join(format!("raypick_scene_{}.json", std::process::id()));
        std::fs::write(&path, EXAMPLE).unwrap();
        let data: SceneData = load_json(&path).expect("failed to load scene");
        assert_eq!(data.primitives.len(), 2);
        let _ = std::fs::remove_file(&path);

        match load_json::<SceneData, _>(&path) {
            Err(Error::Io { path: missing, .. }) => assert_eq!(missing, path),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }
}
