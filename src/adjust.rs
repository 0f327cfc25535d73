//! Keyboard nudging of the cat sprite.
//!
//! A static association list maps key values to a field of [`PositionAdjust`]
//! and a delta. Shift selects the coarse delta when a rule has one.

use anyhow::{Result, ensure};

/// Transform applied to the cat sprite (scene-local pixels, radians, scale factor).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionAdjust {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl Default for PositionAdjust {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl PositionAdjust {
    fn field_mut(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::X => &mut self.x,
            Field::Y => &mut self.y,
            Field::Rotation => &mut self.rotation,
            Field::Scale => &mut self.scale,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
    Rotation,
    Scale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

#[derive(Clone, Copy, Debug)]
pub struct AdjustmentRule {
    pub key: &'static str,
    pub field: Field,
    pub delta: f64,
    pub shift_delta: Option<f64>,
    pub op: Operation,
}

impl AdjustmentRule {
    const fn add(key: &'static str, field: Field, delta: f64, shift_delta: Option<f64>) -> Self {
        Self {
            key,
            field,
            delta,
            shift_delta,
            op: Operation::Add,
        }
    }

    const fn mul(key: &'static str, delta: f64, shift_delta: f64) -> Self {
        Self {
            key,
            field: Field::Scale,
            delta,
            shift_delta: Some(shift_delta),
            op: Operation::Multiply,
        }
    }

    pub fn effective_delta(&self, shift: bool) -> f64 {
        match (shift, self.shift_delta) {
            (true, Some(d)) => d,
            _ => self.delta,
        }
    }

    pub fn apply(&self, state: &mut PositionAdjust, shift: bool) {
        let d = self.effective_delta(shift);
        let slot = state.field_mut(self.field);
        match self.op {
            Operation::Multiply => *slot *= d,
            Operation::Add => *slot += d,
        }
    }
}

/// Default key bindings. `{`/`}` are the coarse rotation steps (Shift + `[`/`]` on US layouts).
pub const ADJUSTMENTS: &[AdjustmentRule] = &[
    AdjustmentRule::add("ArrowLeft", Field::X, -1.0, Some(-10.0)),
    AdjustmentRule::add("ArrowRight", Field::X, 1.0, Some(10.0)),
    AdjustmentRule::add("ArrowUp", Field::Y, -1.0, Some(-10.0)),
    AdjustmentRule::add("ArrowDown", Field::Y, 1.0, Some(10.0)),
    AdjustmentRule::add("[", Field::Rotation, 0.02, None),
    AdjustmentRule::add("]", Field::Rotation, -0.02, None),
    AdjustmentRule::add("{", Field::Rotation, 0.1, None),
    AdjustmentRule::add("}", Field::Rotation, -0.1, None),
    AdjustmentRule::mul("+", 1.02, 1.1),
    AdjustmentRule::mul("-", 0.98, 0.9),
];

/// Validated, duplicate-free rule list.
#[derive(Clone, Copy, Debug)]
pub struct AdjustmentTable {
    rules: &'static [AdjustmentRule],
}

impl AdjustmentTable {
    pub fn new(rules: &'static [AdjustmentRule]) -> Result<Self> {
        for (i, rule) in rules.iter().enumerate() {
            ensure!(!rule.key.is_empty(), "adjustment rule {i} has an empty key");
            ensure!(
                !rules[..i].iter().any(|r| r.key == rule.key),
                "duplicate adjustment key '{}'",
                rule.key
            );
        }
        Ok(Self { rules })
    }

    pub fn lookup(&self, key: &str) -> Option<&AdjustmentRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    pub fn rules(&self) -> &'static [AdjustmentRule] {
        self.rules
    }
}

/// Owns the sprite transform and applies key rules to it.
#[derive(Debug)]
pub struct SpriteAdjuster {
    table: AdjustmentTable,
    state: PositionAdjust,
}

impl SpriteAdjuster {
    pub fn new(table: AdjustmentTable) -> Self {
        Self {
            table,
            state: PositionAdjust::default(),
        }
    }

    pub fn with_default_table() -> Result<Self> {
        Ok(Self::new(AdjustmentTable::new(ADJUSTMENTS)?))
    }

    pub fn state(&self) -> &PositionAdjust {
        &self.state
    }

    /// Applies the rule bound to `key`, if any. Returns whether the state changed
    /// (and the sprite layer needs repainting).
    pub fn apply_key(&mut self, key: &str, shift: bool) -> bool {
        let Some(rule) = self.table.lookup(key) else {
            return false;
        };
        rule.apply(&mut self.state, shift);
        log::debug!("sprite adjusted by '{key}' (shift={shift}): {:?}", self.state);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjuster() -> SpriteAdjuster {
        SpriteAdjuster::with_default_table().unwrap()
    }

    #[test]
    fn default_table_is_valid() {
        let table = AdjustmentTable::new(ADJUSTMENTS).unwrap();
        assert_eq!(table.rules().len(), 10);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        static DUP: &[AdjustmentRule] = &[
            AdjustmentRule::add("ArrowLeft", Field::X, -1.0, None),
            AdjustmentRule::add("ArrowLeft", Field::Y, 1.0, None),
        ];
        let err = AdjustmentTable::new(DUP).unwrap_err();
        assert!(err.to_string().contains("duplicate adjustment key 'ArrowLeft'"));
    }

    #[test]
    fn empty_keys_are_rejected() {
        static EMPTY: &[AdjustmentRule] = &[AdjustmentRule::add("", Field::X, 1.0, None)];
        assert!(AdjustmentTable::new(EMPTY).is_err());
    }

    #[test]
    fn arrows_move_by_one_or_ten() {
        let mut a = adjuster();
        assert!(a.apply_key("ArrowRight", false));
        assert_eq!(a.state().x, 1.0);
        a.apply_key("ArrowRight", true);
        assert_eq!(a.state().x, 11.0);
        a.apply_key("ArrowUp", true);
        a.apply_key("ArrowDown", false);
        assert_eq!(a.state().y, -9.0);
        a.apply_key("ArrowLeft", false);
        assert_eq!(a.state().x, 10.0);
    }

    #[test]
    fn rotation_ignores_shift() {
        let mut a = adjuster();
        a.apply_key("[", true);
        assert_eq!(a.state().rotation, 0.02);
        a.apply_key("}", false);
        assert_eq!(a.state().rotation, 0.02 - 0.1);
    }

    #[test]
    fn scale_multiplies() {
        let mut a = adjuster();
        a.apply_key("+", false);
        assert_eq!(a.state().scale, 1.02);
        a.apply_key("+", true);
        assert_eq!(a.state().scale, 1.02 * 1.1);
        a.apply_key("-", true);
        assert_eq!(a.state().scale, 1.02 * 1.1 * 0.9);
    }

    #[test]
    fn lookup_is_case_sensitive_and_exact() {
        let mut a = adjuster();
        assert!(!a.apply_key("arrowright", false));
        assert!(!a.apply_key("q", false));
        assert!(!a.apply_key("Right", false));
        assert_eq!(*a.state(), PositionAdjust::default());
    }
}
