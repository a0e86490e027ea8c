use super::*;

const FPS_WINDOW: usize = 60;

fn now_ms() -> Option<f64> {
    web_sys::window().and_then(|w| w.performance()).map(|p| p.now())
}

impl SceneRenderer {
    pub(super) fn record_frame_time(&mut self) {
        let Some(now) = now_ms() else { return };
        if self.last_frame_time > 0.0 {
            let delta = now - self.last_frame_time;
            if delta > 0.0 {
                self.fps_log.push_back(1000.0 / delta);
                if self.fps_log.len() > FPS_WINDOW {
                    self.fps_log.pop_front();
                }
            }
        }
        self.last_frame_time = now;
    }

    /// Mean FPS over the last frames rendered
    pub fn average_fps(&self) -> f64 {
        if self.fps_log.is_empty() {
            0.0
        } else {
            self.fps_log.iter().sum::<f64>() / self.fps_log.len() as f64
        }
    }

    /// Render `num_frames` frames back to back and return the achieved FPS.
    pub fn measure_fps(&mut self, scene: &Scene, num_frames: u32) -> Option<f64> {
        let start = now_ms()?;
        for _ in 0..num_frames {
            if let Err(e) = self.render(scene) {
                get_logger().warn(
                    LogComponent::Infrastructure("SceneRenderer"),
                    &format!("⚠️ Frame failed during measurement: {:?}", e),
                );
            }
        }
        let elapsed = (now_ms()? - start) / 1000.0;
        Some(if elapsed > 0.0 { num_frames as f64 / elapsed } else { 0.0 })
    }
}
