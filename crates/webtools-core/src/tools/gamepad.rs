//! Gamepad snapshot model and stick math.

/// Button names for the W3C "standard" gamepad mapping, by index.
const STANDARD_BUTTONS: [&str; 17] = [
    "A", "B", "X", "Y", "LB", "RB", "LT", "RT", "Back", "Start", "LS", "RS", "Up", "Down",
    "Left", "Right", "Home",
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonState {
    pub pressed: bool,
    /// Analog value in `0.0..=1.0` (triggers); digital buttons report 0 or 1.
    pub value: f64,
}

/// State of one connected gamepad at one poll.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GamepadSnapshot {
    pub index: u32,
    pub id: String,
    /// True for the W3C standard layout.
    pub standard: bool,
    pub buttons: Vec<ButtonState>,
    /// Raw axis values in `-1.0..=1.0`.
    pub axes: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickPosition {
    pub x: f64,
    pub y: f64,
}

impl StickPosition {
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl GamepadSnapshot {
    pub fn pressed_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.pressed).count()
    }

    /// Consecutive axis pairs as sticks, with the deadzone applied.
    pub fn sticks(&self, deadzone: f64) -> Vec<StickPosition> {
        self.axes
            .chunks_exact(2)
            .map(|pair| {
                stick_position(
                    apply_deadzone(pair[0], deadzone),
                    apply_deadzone(pair[1], deadzone),
                )
            })
            .collect()
    }

    pub fn button_label(&self, index: usize) -> String {
        match STANDARD_BUTTONS.get(index) {
            Some(name) if self.standard => (*name).to_string(),
            _ => format!("B{}", index),
        }
    }
}

/// Zero values inside the deadzone and rescale the rest to the full range.
pub fn apply_deadzone(value: f64, deadzone: f64) -> f64 {
    let deadzone = deadzone.clamp(0.0, 0.99);
    let magnitude = value.abs();
    if magnitude < deadzone {
        return 0.0;
    }
    let scaled = (magnitude - deadzone) / (1.0 - deadzone);
    scaled.min(1.0).copysign(value)
}

/// Clamp a stick position onto the unit disc.
pub fn stick_position(x: f64, y: f64) -> StickPosition {
    let magnitude = x.hypot(y);
    if magnitude > 1.0 {
        StickPosition {
            x: x / magnitude,
            y: y / magnitude,
        }
    } else {
        StickPosition { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone() {
        assert_eq!(apply_deadzone(0.05, 0.1), 0.0);
        assert_eq!(apply_deadzone(-0.05, 0.1), 0.0);
        assert!((apply_deadzone(0.55, 0.1) - 0.5).abs() < 1e-9);
        assert!((apply_deadzone(-1.0, 0.1) + 1.0).abs() < 1e-9);
        assert_eq!(apply_deadzone(0.3, 0.0), 0.3);
    }

    #[test]
    fn test_stick_clamped_to_unit_disc() {
        let p = stick_position(1.0, 1.0);
        assert!((p.magnitude() - 1.0).abs() < 1e-9);
        assert_eq!(stick_position(0.3, -0.4), StickPosition { x: 0.3, y: -0.4 });
    }

    #[test]
    fn test_snapshot_sticks_and_buttons() {
        let pad = GamepadSnapshot {
            index: 0,
            id: "Xbox Controller".to_string(),
            standard: true,
            buttons: vec![
                ButtonState { pressed: true, value: 1.0 },
                ButtonState::default(),
                ButtonState { pressed: true, value: 0.7 },
            ],
            axes: vec![0.02, -0.01, 1.0, 0.0, 0.5],
        };

        assert_eq!(pad.pressed_count(), 2);
        let sticks = pad.sticks(0.1);
        assert_eq!(sticks.len(), 2);
        assert_eq!(sticks[0], StickPosition { x: 0.0, y: 0.0 });
        assert!((sticks[1].x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_button_labels() {
        let mut pad = GamepadSnapshot {
            standard: true,
            ..Default::default()
        };
        assert_eq!(pad.button_label(0), "A");
        assert_eq!(pad.button_label(16), "Home");
        assert_eq!(pad.button_label(17), "B17");

        pad.standard = false;
        assert_eq!(pad.button_label(0), "B0");
    }
}
