use crate::prelude::{VizError, VizResult};

/// Near-square tile layout for per-channel activation maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }
}

/// `columns = floor(sqrt(n))`, `rows = ceil(n / columns) + 1`. The extra row
/// leaves caption headroom above the tiles.
pub fn grid_layout(channel_count: usize) -> VizResult<GridLayout> {
    if channel_count == 0 {
        return Err(VizError::InvalidInput(
            "cannot lay out a grid for zero channels".into(),
        ));
    }
    let columns = (channel_count as f64).sqrt().floor() as usize;
    let rows = (channel_count + columns - 1) / columns + 1;
    Ok(GridLayout { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_channels_use_three_by_five() {
        let layout = grid_layout(10).unwrap();
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.rows, 5);
    }

    #[test]
    fn square_counts_keep_the_slack_row() {
        let layout = grid_layout(16).unwrap();
        assert_eq!(layout.columns, 4);
        assert_eq!(layout.rows, 5);
    }

    #[test]
    fn single_channel_fits_one_column() {
        let layout = grid_layout(1).unwrap();
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.cell_count(), 2);
    }

    #[test]
    fn zero_channels_are_rejected() {
        assert!(matches!(
            grid_layout(0).unwrap_err(),
            VizError::InvalidInput(_)
        ));
    }
}
