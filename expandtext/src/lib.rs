pub mod animation;
pub mod buffer;
pub mod config;
pub mod controller;
pub mod event;
pub mod hit;
pub mod layout;
pub mod measure;
pub mod probe;
pub mod render;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;
pub mod widget;

pub use animation::{AnimationRun, Frame};
pub use buffer::Buffer;
pub use config::{ConfigError, ExpandConfig};
pub use controller::{ExpandController, Phase, ToggleState};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{Rect, WidgetLayout};
pub use measure::{CellMeasure, MonospaceMeasure, TextMeasure};
pub use probe::{LayoutProbe, MeasuredState, ProbeOutcome};
pub use render::render_widget;
pub use surface::{LineClip, Surface, ViewState};
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
pub use widget::{ExpandTextView, Target};
