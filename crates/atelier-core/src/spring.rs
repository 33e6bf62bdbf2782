use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

/// One-dimensional damped spring chasing `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < SPRING_REST_DELTA && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Advance by `dt_sec`, sub-stepping so large frame gaps stay stable.
    pub fn step(&mut self, params: &SpringParams, dt_sec: f32) {
        if dt_sec <= 0.0 || self.is_at_rest() {
            if self.is_at_rest() {
                self.value = self.target;
                self.velocity = 0.0;
            }
            return;
        }
        let steps = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / steps as f32;
        let inv_mass = 1.0 / params.mass.max(f32::EPSILON);
        for _ in 0..steps {
            let accel =
                (params.stiffness * (self.target - self.value) - params.damping * self.velocity)
                    * inv_mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
