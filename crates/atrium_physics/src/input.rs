//! Held movement keys and the one-shot jump request

use glam::Vec2;

/// A movement action a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

/// Movement keys currently held, plus a pending jump request
///
/// Directions follow key-down/key-up edges. The jump flag is set on
/// key-down and cleared the moment the body samples it, whether or not
/// the jump could be performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    jump: bool,
}

impl MoveIntent {
    /// Key-down edge
    pub fn press(&mut self, action: MoveAction) {
        match action {
            MoveAction::Forward => self.forward = true,
            MoveAction::Backward => self.backward = true,
            MoveAction::Left => self.left = true,
            MoveAction::Right => self.right = true,
            MoveAction::Jump => self.jump = true,
        }
    }

    /// Key-up edge. Releasing jump does not cancel a pending request.
    pub fn release(&mut self, action: MoveAction) {
        match action {
            MoveAction::Forward => self.forward = false,
            MoveAction::Backward => self.backward = false,
            MoveAction::Left => self.left = false,
            MoveAction::Right => self.right = false,
            MoveAction::Jump => {}
        }
    }

    #[inline]
    pub fn jump_requested(&self) -> bool {
        self.jump
    }

    /// Sample and clear the jump request
    #[inline]
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Unit input direction: `x` = right − left, `y` = forward − backward
    ///
    /// Opposite keys cancel to zero.
    pub fn direction(&self) -> Vec2 {
        let x = f32::from(u8::from(self.right)) - f32::from(u8::from(self.left));
        let y = f32::from(u8::from(self.forward)) - f32::from(u8::from(self.backward));
        Vec2::new(x, y).normalize_or_zero()
    }

    pub fn is_moving(&self) -> bool {
        self.direction() != Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut intent = MoveIntent::default();
        intent.press(MoveAction::Forward);
        assert!(intent.forward);
        intent.release(MoveAction::Forward);
        assert!(!intent.forward);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut intent = MoveIntent::default();
        intent.press(MoveAction::Left);
        intent.press(MoveAction::Right);
        assert_eq!(intent.direction(), Vec2::ZERO);
        assert!(!intent.is_moving());
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let mut intent = MoveIntent::default();
        intent.press(MoveAction::Forward);
        intent.press(MoveAction::Right);
        assert!((intent.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_jump_is_one_shot() {
        let mut intent = MoveIntent::default();
        intent.press(MoveAction::Jump);
        intent.release(MoveAction::Jump);
        assert!(intent.jump_requested());
        assert!(intent.take_jump());
        assert!(!intent.take_jump());
    }
}
