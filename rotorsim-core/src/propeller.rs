use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Local axis every rotor disk spins about.
pub const SPIN_AXIS: Vec3 = Vec3::new(0.0, 0.0, 1.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propeller {
    pub label: String,
    pub mount: Vec3,
    pub angle_deg: f32,
}

impl Propeller {
    pub fn new(label: impl Into<String>, mount: Vec3) -> Self {
        Self {
            label: label.into(),
            mount,
            angle_deg: 0.0,
        }
    }
}

/// Ordered propeller slots. A slot may be unset, mirroring a scene
/// reference that was never assigned; unset slots are skipped rather than
/// failing the step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropellerRig {
    slots: Vec<Option<Propeller>>,
}

impl PropellerRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<Option<Propeller>>) -> Self {
        Self { slots }
    }

    /// Four rotors at the corners of a square with the given arm length.
    pub fn quad(arm: f32) -> Self {
        let mounts = [
            ("front-left", Vec3::new(arm, arm, 0.0)),
            ("front-right", Vec3::new(arm, -arm, 0.0)),
            ("rear-left", Vec3::new(-arm, arm, 0.0)),
            ("rear-right", Vec3::new(-arm, -arm, 0.0)),
        ];
        Self {
            slots: mounts
                .into_iter()
                .map(|(label, mount)| Some(Propeller::new(label, mount)))
                .collect(),
        }
    }

    pub fn slots(&self) -> &[Option<Propeller>] {
        &self.slots
    }

    pub fn set_slot(&mut self, index: usize, propeller: Option<Propeller>) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = propeller;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Rotates every set slot by `rate_deg_per_sec * dt` degrees about
    /// `SPIN_AXIS` and returns how many slots were spun. Angles wrap into
    /// [0, 360).
    pub fn spin_all(&mut self, rate_deg_per_sec: f32, dt: f32) -> usize {
        let step = rate_deg_per_sec * dt;
        let mut spun = 0;
        for slot in self.slots.iter_mut().flatten() {
            slot.angle_deg = (slot.angle_deg + step).rem_euclid(360.0);
            spun += 1;
        }
        spun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn spin_advances_every_set_slot_by_rate_times_dt() {
        let mut rig = PropellerRig::quad(0.25);
        let spun = rig.spin_all(1000.0, DT);

        assert_eq!(spun, 4);
        let expected = 1000.0 * DT;
        for slot in rig.slots().iter().flatten() {
            assert!((slot.angle_deg - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn unset_slots_are_skipped() {
        let mut rig = PropellerRig::from_slots(vec![
            Some(Propeller::new("only", Vec3::ZERO)),
            None,
            Some(Propeller::new("other", Vec3::ZERO)),
        ]);

        assert_eq!(rig.spin_all(600.0, 0.5), 2);
        assert!(rig.slots()[1].is_none());
    }

    #[test]
    fn angles_wrap_at_full_turns() {
        let mut rig = PropellerRig::from_slots(vec![Some(Propeller::new("p", Vec3::ZERO))]);
        rig.spin_all(730.0, 1.0);

        let angle = rig.slots()[0].as_ref().unwrap().angle_deg;
        assert!((angle - 10.0).abs() < 1e-3);
    }

    #[test]
    fn set_slot_grows_the_rig() {
        let mut rig = PropellerRig::new();
        rig.set_slot(2, Some(Propeller::new("late", Vec3::ZERO)));

        assert_eq!(rig.len(), 3);
        assert!(rig.slots()[0].is_none());
        assert!(rig.slots()[2].is_some());
    }
}
