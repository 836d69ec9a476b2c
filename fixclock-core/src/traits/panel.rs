//! Panel trait for the graphical text display, and the field layout on it

/// Errors that can occur when drawing on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Communication error with the panel controller
    Communication,
    /// Region or text position outside the panel
    OutOfBounds,
}

/// Rectangular region in panel pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Left edge of every field
pub const FIELD_X: u16 = 10;

/// Width of the region cleared before a field is redrawn
pub const FIELD_WIDTH: u16 = 220;

/// Height of the region cleared before a field is redrawn
pub const FIELD_HEIGHT: u16 = 38;

pub const FIELD_COUNT: usize = 5;

/// Labeled text fields on the panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelField {
    Date,
    Latitude,
    Longitude,
    Altitude,
    Satellites,
}

impl PanelField {
    /// All fields in drawing order
    pub const ALL: [PanelField; FIELD_COUNT] = [
        PanelField::Date,
        PanelField::Latitude,
        PanelField::Longitude,
        PanelField::Altitude,
        PanelField::Satellites,
    ];

    pub const fn index(&self) -> usize {
        match self {
            PanelField::Date => 0,
            PanelField::Latitude => 1,
            PanelField::Longitude => 2,
            PanelField::Altitude => 3,
            PanelField::Satellites => 4,
        }
    }

    /// Top edge of the field
    pub const fn y(&self) -> u16 {
        match self {
            PanelField::Date => 10,
            PanelField::Latitude => 50,
            PanelField::Longitude => 90,
            PanelField::Altitude => 130,
            PanelField::Satellites => 170,
        }
    }

    pub const fn region(&self) -> Region {
        Region::new(FIELD_X, self.y(), FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// Trait for a panel that can clear regions and draw text
pub trait Panel {
    /// Fill a region with the background color
    fn clear_region(&mut self, region: Region) -> Result<(), PanelError>;

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), PanelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_regions_stack_without_overlap() {
        for pair in PanelField::ALL.windows(2) {
            let (upper, lower) = (pair[0].region(), pair[1].region());
            assert!(upper.y + upper.height <= lower.y);
            assert_eq!(upper.x, FIELD_X);
        }
        assert_eq!(PanelField::ALL.map(|f| f.index()), [0, 1, 2, 3, 4]);
    }
}
