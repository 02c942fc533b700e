#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Shift,
    Control,
    Alt,
}

/// Click record handed over by the host GUI dispatcher. `position` is
/// `[time, y, x]` in data coordinates.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub position: [f32; 3],
    pub modifiers: Vec<Modifier>,
}

impl ClickEvent {
    pub fn new(button: MouseButton, position: [f32; 3]) -> Self {
        Self {
            button,
            position,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    #[inline]
    pub fn shift_held(&self) -> bool {
        self.modifiers.contains(&Modifier::Shift)
    }
}
