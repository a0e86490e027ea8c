use glam::Vec3;

use crate::domain::{
    config::SceneConfig,
    errors::AppResult,
    geometry::ShapeKind,
    logging::{LogComponent, get_logger},
    scene::{FormValues, Projection, Scene, SceneParameters},
};

/// Builds scenes and applies parameter changes to them.
#[derive(Debug, Clone)]
pub struct SceneService {
    config: SceneConfig,
}

impl SceneService {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The start-up scene: a torus, a sphere and a triangle around the origin.
    pub fn demo_scene(&self) -> Scene {
        let mut scene = Scene::new(self.config.background);

        scene.add_shape(ShapeKind::Torus { r1: 1.0, r2: 0.5, n: 30, m: 20 }, Vec3::new(1.0, 2.0, 0.0));
        scene.add_shape(ShapeKind::Sphere { r: 1.5, n: 30, m: 30 }, Vec3::new(0.0, -1.0, 1.0));
        scene.add_shape(ShapeKind::Triangle, Vec3::new(-1.0, 0.0, -1.0));

        let camera = &self.config.camera;
        scene.camera.look_at(camera.eye.into(), camera.center.into(), camera.up.into());
        scene.camera.perspective(camera.fovy, 1.0, camera.znear, camera.zfar);

        get_logger().info(
            LogComponent::Application("SceneService"),
            &format!("🎬 Demo scene built: {} shapes, {} vertices", scene.len(), scene.vertex_count()),
        );

        scene
    }

    /// Apply the projection and, when a shape is selected, replace the scene
    /// content with that shape at the origin.
    pub fn apply_parameters(&self, scene: &mut Scene, params: &SceneParameters) {
        if let Some(shape) = params.shape {
            scene.clear();
            scene.add_shape(shape, Vec3::ZERO);
        }
        scene.camera.projection = params.projection;

        let projection = if params.projection.is_perspective() { "perspective" } else { "orthographic" };
        let shape = params.shape.map_or("unchanged".to_string(), |s| s.selector().to_string());
        get_logger().info(
            LogComponent::Application("SceneService"),
            &format!(
                "🔄 Scene updated: shape {}, {} vertices, {} projection",
                shape,
                scene.vertex_count(),
                projection
            ),
        );
    }

    /// Parse the form and apply it. On invalid input the scene is left untouched.
    pub fn apply_form(&self, scene: &mut Scene, values: &FormValues) -> AppResult<SceneParameters> {
        let params = SceneParameters::from_form(values).inspect_err(|e| {
            get_logger().warn(LogComponent::Application("SceneService"), &format!("⚠️ {}", e));
        })?;
        self.apply_parameters(scene, &params);
        Ok(params)
    }
}

/// Scene state owned by the caller and passed explicitly to UI handlers.
pub struct SceneContext {
    pub service: SceneService,
    pub scene: Scene,
}

impl SceneContext {
    pub fn new(config: SceneConfig) -> Self {
        let service = SceneService::new(config);
        let scene = service.demo_scene();
        Self { service, scene }
    }

    pub fn apply_form(&mut self, values: &FormValues) -> AppResult<SceneParameters> {
        self.service.apply_form(&mut self.scene, values)
    }

    /// Swap the shape while keeping the current projection.
    pub fn select_shape(&mut self, shape: ShapeKind) {
        let params = SceneParameters { shape: Some(shape), projection: self.scene.camera.projection };
        self.service.apply_parameters(&mut self.scene, &params);
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.scene.camera.projection = projection;
    }
}
