//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer and the MCP server can share it.

use std::fmt;

use super::{collections::WateringLog, datetime::HumanDate};
use crate::models::{Dashboard, Plant, PlantHistory, PlantOverview, PlantStatus, Stats};

/// "1 day" / "3 days"
fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Waters every: {}", days(self.frequency))?;
        writeln!(f, "- Last watered: {}", HumanDate(&self.last_watered))?;
        writeln!(f, "- Next due: {}", HumanDate(&self.due_date()))
    }
}

impl fmt::Display for PlantOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status_text)?;
        if self.watered_today {
            writeln!(f, "- **Last watered**: {} (today)", self.last_watered_human)?;
        } else {
            writeln!(f, "- **Last watered**: {}", self.last_watered_human)?;
        }
        writeln!(f, "- **Next due**: {}", HumanDate(&self.due_date))?;
        writeln!(f, "- **Waters every**: {}", days(self.frequency))?;
        writeln!(f)
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plants.is_empty() {
            return writeln!(f, "No plants found.");
        }

        if !self.alerts.is_empty() {
            writeln!(f, "## Needs water")?;
            writeln!(f)?;
            for name in &self.alerts {
                writeln!(f, "- {name}")?;
            }
            writeln!(f)?;
        }

        for plant in &self.plants {
            write!(f, "{plant}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlantHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plant)?;
        writeln!(f)?;
        writeln!(f, "## Watering History")?;
        writeln!(f)?;
        write!(f, "{}", WateringLog(&self.events))
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Plants**: {}", self.total_plants)?;
        writeln!(f, "- **Waterings**: {}", self.total_waterings)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::WateringEvent;

    use super::*;

    fn fern() -> Plant {
        Plant {
            id: 4,
            name: "Fern".to_string(),
            frequency: 3,
            last_watered: date(2024, 1, 1),
        }
    }

    #[test]
    fn test_plant_display() {
        let output = fern().to_string();
        assert!(output.contains("# 4. Fern"));
        assert!(output.contains("- Waters every: 3 days"));
        assert!(output.contains("- Last watered: January 01, 2024"));
        assert!(output.contains("- Next due: January 04, 2024"));
    }

    #[test]
    fn test_overview_display_marks_today() {
        let overview = PlantOverview::new(fern(), date(2024, 1, 1));
        let output = overview.to_string();
        assert!(output.contains("### 4. Fern (✓ Healthy)"));
        assert!(output.contains("- **Status**: Due in 3 days"));
        assert!(output.contains("January 01, 2024 (today)"));
    }

    #[test]
    fn test_dashboard_display_lists_alerts_first() {
        let mut cactus = fern();
        cactus.id = 5;
        cactus.name = "Cactus".to_string();
        cactus.frequency = 30;

        let dashboard = Dashboard::new(vec![fern(), cactus], date(2024, 1, 6));
        let output = dashboard.to_string();

        let alerts_at = output.find("## Needs water").unwrap();
        let fern_alert_at = output.find("- Fern").unwrap();
        let first_plant_at = output.find("### 4. Fern (✗ Overdue)").unwrap();
        assert!(alerts_at < fern_alert_at && fern_alert_at < first_plant_at);
        assert!(output.contains("2 days overdue"));
        assert!(output.contains("### 5. Cactus (✓ Healthy)"));
        assert!(!output.contains("- Cactus"));
    }

    #[test]
    fn test_dashboard_display_without_alerts_or_plants() {
        let empty = Dashboard::new(Vec::new(), date(2024, 1, 1));
        assert_eq!(empty.to_string(), "No plants found.\n");

        let calm = Dashboard::new(vec![fern()], date(2024, 1, 1));
        assert!(!calm.to_string().contains("Needs water"));
    }

    #[test]
    fn test_history_display() {
        let history = PlantHistory::new(
            fern(),
            vec![
                WateringEvent {
                    id: 2,
                    plant_id: 4,
                    date: date(2024, 1, 1),
                },
                WateringEvent {
                    id: 1,
                    plant_id: 4,
                    date: date(2023, 12, 28),
                },
            ],
        );
        let output = history.to_string();
        assert!(output.contains("## Watering History"));
        let newest = output.find("January 01, 2024").unwrap();
        let oldest = output.find("December 28, 2023").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_stats_display() {
        let stats = Stats {
            total_plants: 2,
            total_waterings: 9,
        };
        assert_eq!(stats.to_string(), "- **Plants**: 2\n- **Waterings**: 9\n");
    }
}
