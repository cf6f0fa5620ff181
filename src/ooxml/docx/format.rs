/// WordprocessingML attribute values of the IR enums.
use crate::ir::{Alignment, BorderStyle, TabAlignment, VerticalMerge};

pub(crate) trait AsWmlValue {
    fn as_wml(&self) -> &'static str;
}

impl AsWmlValue for Alignment {
    fn as_wml(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

impl AsWmlValue for TabAlignment {
    fn as_wml(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl AsWmlValue for BorderStyle {
    fn as_wml(&self) -> &'static str {
        match self {
            Self::Single => "single",
        }
    }
}

impl AsWmlValue for VerticalMerge {
    fn as_wml(&self) -> &'static str {
        match self {
            Self::Restart => "restart",
            Self::Continue => "continue",
        }
    }
}
