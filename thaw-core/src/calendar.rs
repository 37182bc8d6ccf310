//! Availability calendar: month grid generation and severity filtering.
//!
//! A grid is `7 headers + leading blanks + one cell per day`. Per-day data
//! comes from an [`OccupancyProvider`]; the default provider draws random
//! placeholder values, so two grids for the same month share their shape
//! but not their contents.

use log::{error, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thaw_utils::dates::{days_in_month, first_weekday, WEEKDAY_NAMES};
use thaw_utils::error::DateError;

/// Coarse availability class of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// CSS class and `data-status` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    pub day: u32,
    pub severity: Severity,
    pub weight_kg: u32,
}

impl CalendarCell {
    /// `data-tooltip` text.
    pub fn tooltip(&self) -> String {
        format!("Dia {}: {} kg", self.day, self.weight_kg)
    }

    /// Two-digit day label.
    pub fn label(&self) -> String {
        format!("{:02}", self.day)
    }
}

/// Source of per-day occupancy for a month (`month0` is zero-based).
///
/// Implementations should return one cell per day of the month; days
/// outside the month are ignored and missing days are rendered as empty
/// low-severity cells.
pub trait OccupancyProvider {
    fn occupancy(&mut self, month0: u32, year: i32) -> Result<Vec<CalendarCell>, DateError>;
}

/// Placeholder occupancy: uniform severity, weight in `[50, 250)` kg.
pub struct RandomOccupancy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomOccupancy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOccupancy<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> OccupancyProvider for RandomOccupancy<R> {
    fn occupancy(&mut self, month0: u32, year: i32) -> Result<Vec<CalendarCell>, DateError> {
        let days = days_in_month(month0, year)?;
        Ok((1..=days)
            .map(|day| {
                let severity = match self.rng.gen_range(0..3) {
                    2 => Severity::High,
                    1 => Severity::Medium,
                    _ => Severity::Low,
                };
                CalendarCell {
                    day,
                    severity,
                    weight_kg: self.rng.gen_range(50..250),
                }
            })
            .collect())
    }
}

/// Value of the `filtroCritico` control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub fn shows(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(selected) => *selected == severity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityFilter::All => "all",
            SeverityFilter::Only(severity) => severity.as_str(),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SeverityFilter::All),
            other => other.parse().map(SeverityFilter::Only),
        }
    }
}

/// One child of the `calendarGrid` container.
#[derive(Debug, Clone, PartialEq)]
pub enum GridSlot {
    Header(&'static str),
    Blank,
    Day { cell: CalendarCell, visible: bool },
}

impl GridSlot {
    /// `data-status` attribute; only day cells carry one.
    pub fn status(&self) -> Option<&'static str> {
        match self {
            GridSlot::Day { cell, .. } => Some(cell.severity.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    pub month0: u32,
    pub year: i32,
    pub slots: Vec<GridSlot>,
}

impl CalendarGrid {
    /// Build the full grid for `month0`/`year`, every day visible.
    pub fn generate<P: OccupancyProvider>(
        month0: u32,
        year: i32,
        provider: &mut P,
    ) -> Result<Self, DateError> {
        let leading = first_weekday(month0, year)?;
        let days = days_in_month(month0, year)?;

        let mut by_day: Vec<Option<CalendarCell>> = vec![None; days as usize];
        for cell in provider.occupancy(month0, year)? {
            match by_day.get_mut((cell.day as usize).wrapping_sub(1)) {
                Some(slot) => *slot = Some(cell),
                None => warn!("Ignoring day {} outside {}/{}", cell.day, month0 + 1, year),
            }
        }

        let mut slots = Vec::with_capacity(7 + leading as usize + days as usize);
        slots.extend(WEEKDAY_NAMES.iter().map(|name| GridSlot::Header(*name)));
        slots.extend((0..leading).map(|_| GridSlot::Blank));
        for (index, cell) in by_day.into_iter().enumerate() {
            let day = index as u32 + 1;
            let cell = cell.unwrap_or_else(|| {
                warn!("No occupancy for day {}", day);
                CalendarCell {
                    day,
                    severity: Severity::Low,
                    weight_kg: 0,
                }
            });
            slots.push(GridSlot::Day {
                cell,
                visible: true,
            });
        }

        Ok(Self {
            month0,
            year,
            slots,
        })
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.slots.iter().filter_map(|slot| match slot {
            GridSlot::Day { cell, .. } => Some(cell),
            _ => None,
        })
    }

    pub fn visible_days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.slots.iter().filter_map(|slot| match slot {
            GridSlot::Day { cell, visible: true } => Some(cell),
            _ => None,
        })
    }

    pub fn leading_blanks(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, GridSlot::Blank))
            .count()
    }

    /// Show exactly the day cells the filter accepts. Headers and blanks
    /// are left as they are.
    pub fn apply_filter(&mut self, filter: SeverityFilter) {
        for slot in &mut self.slots {
            if let GridSlot::Day { cell, visible } = slot {
                *visible = filter.shows(cell.severity);
            }
        }
    }
}

/// Grid for `month0`/`year` with `filter` already applied. A month the
/// calendar cannot represent is logged and yields `None`.
pub fn build_grid<P: OccupancyProvider>(
    month0: u32,
    year: i32,
    filter: SeverityFilter,
    provider: &mut P,
) -> Option<CalendarGrid> {
    match CalendarGrid::generate(month0, year, provider) {
        Ok(mut grid) => {
            grid.apply_filter(filter);
            Some(grid)
        }
        Err(e) => {
            error!("Failed to build calendar for {}/{}: {}", month0 + 1, year, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> RandomOccupancy<StdRng> {
        RandomOccupancy::new(StdRng::seed_from_u64(seed))
    }

    /// Provider returning a fixed list, for shape tests.
    struct Fixed(Vec<CalendarCell>);

    impl OccupancyProvider for Fixed {
        fn occupancy(&mut self, _month0: u32, _year: i32) -> Result<Vec<CalendarCell>, DateError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn june_2025_shape() {
        let grid = CalendarGrid::generate(5, 2025, &mut seeded(1)).unwrap();
        let headers: Vec<&GridSlot> = grid
            .slots
            .iter()
            .filter(|s| matches!(s, GridSlot::Header(_)))
            .collect();
        assert_eq!(headers.len(), 7);
        // June 1 2025 is a Sunday
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.days().count(), 30);
        assert_eq!(grid.slots.len(), 37);
        assert!(grid.days().all(|c| Severity::ALL.contains(&c.severity)));
    }

    #[test]
    fn leading_blanks_match_first_weekday() {
        // Feb 1 2025 is a Saturday
        let grid = CalendarGrid::generate(1, 2025, &mut seeded(2)).unwrap();
        assert_eq!(grid.leading_blanks(), 6);
        assert_eq!(grid.days().count(), 28);
        assert!(matches!(grid.slots[7], GridSlot::Blank));
        assert!(matches!(grid.slots[13], GridSlot::Day { .. }));
    }

    #[test]
    fn random_cells_stay_in_range() {
        let cells = seeded(3).occupancy(0, 2025).unwrap();
        assert_eq!(cells.len(), 31);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.day, i as u32 + 1);
            assert!((50..250).contains(&cell.weight_kg));
        }
    }

    #[test]
    fn cell_text() {
        let cell = CalendarCell {
            day: 7,
            severity: Severity::High,
            weight_kg: 120,
        };
        assert_eq!(cell.tooltip(), "Dia 7: 120 kg");
        assert_eq!(cell.label(), "07");
        assert_eq!(GridSlot::Day { cell, visible: true }.status(), Some("high"));
        assert_eq!(GridSlot::Blank.status(), None);
    }

    #[test]
    fn regeneration_keeps_the_shape() {
        let first = CalendarGrid::generate(5, 2025, &mut seeded(10)).unwrap();
        let second = CalendarGrid::generate(5, 2025, &mut seeded(11)).unwrap();
        assert_eq!(first.slots.len(), second.slots.len());
        let headers = |g: &CalendarGrid| -> Vec<&'static str> {
            g.slots
                .iter()
                .filter_map(|s| match s {
                    GridSlot::Header(h) => Some(*h),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(headers(&first), headers(&second));
        assert_eq!(first.leading_blanks(), second.leading_blanks());
    }

    #[test]
    fn filter_high_shows_only_high_days() {
        let mut grid = CalendarGrid::generate(5, 2025, &mut seeded(4)).unwrap();
        let before: Vec<GridSlot> = grid
            .slots
            .iter()
            .filter(|s| s.status().is_none())
            .cloned()
            .collect();

        grid.apply_filter(SeverityFilter::Only(Severity::High));

        for slot in &grid.slots {
            if let GridSlot::Day { cell, visible } = slot {
                assert_eq!(*visible, cell.severity == Severity::High);
            }
        }
        let after: Vec<GridSlot> = grid
            .slots
            .iter()
            .filter(|s| s.status().is_none())
            .cloned()
            .collect();
        assert_eq!(before, after);

        grid.apply_filter(SeverityFilter::All);
        assert_eq!(grid.visible_days().count(), 30);
    }

    #[test]
    fn filter_parses_control_values() {
        assert_eq!("all".parse::<SeverityFilter>(), Ok(SeverityFilter::All));
        assert_eq!(
            "medium".parse::<SeverityFilter>(),
            Ok(SeverityFilter::Only(Severity::Medium))
        );
        assert!("critical".parse::<SeverityFilter>().is_err());
        assert_eq!(SeverityFilter::Only(Severity::Low).as_str(), "low");
    }

    #[test]
    fn provider_gaps_and_strays() {
        let mut provider = Fixed(vec![
            CalendarCell { day: 2, severity: Severity::High, weight_kg: 99 },
            CalendarCell { day: 40, severity: Severity::High, weight_kg: 1 },
            CalendarCell { day: 0, severity: Severity::High, weight_kg: 1 },
        ]);
        let grid = CalendarGrid::generate(5, 2025, &mut provider).unwrap();
        let days: Vec<&CalendarCell> = grid.days().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].severity, Severity::Low);
        assert_eq!(days[0].weight_kg, 0);
        assert_eq!(days[1].weight_kg, 99);
    }

    #[test]
    fn build_grid_applies_the_filter() {
        let filter = SeverityFilter::Only(Severity::Medium);
        let grid = build_grid(5, 2025, filter, &mut seeded(5)).unwrap();
        assert_eq!(grid.slots.len(), 37);
        assert!(grid.visible_days().all(|c| c.severity == Severity::Medium));
        assert_eq!(
            grid.visible_days().count(),
            grid.days().filter(|c| c.severity == Severity::Medium).count()
        );
        assert!(build_grid(12, 2025, SeverityFilter::All, &mut seeded(5)).is_none());
    }

    #[test]
    fn invalid_month_is_an_error() {
        assert!(CalendarGrid::generate(12, 2025, &mut seeded(5)).is_err());
    }
}
