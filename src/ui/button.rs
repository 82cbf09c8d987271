use macroquad::prelude::*;

/// What a control panel button asks the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Step,
    Clear,
    Randomize,
}

impl ButtonAction {
    pub fn label(self) -> &'static str {
        match self {
            ButtonAction::PlayPause => "Play/Pause",
            ButtonAction::Step => "Step",
            ButtonAction::Clear => "Clear",
            ButtonAction::Randomize => "Random",
        }
    }
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: ButtonAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// Check if a point is inside the button
    pub fn contains(&self, (mx, my): (f32, f32)) -> bool {
        mx >= self.x && mx <= self.x + self.width && my >= self.y && my <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let label = self.action.label();
        let text_size = measure_text(label, None, 20, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
