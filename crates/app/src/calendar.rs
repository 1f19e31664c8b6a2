//! Month grid, range selection and event styling for the duty calendar.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use data::plan::Plan;
use data::user::Role;

use crate::theme::Theme;

pub const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_back = match date.weekday().num_days_from_sunday() {
        0 => 6,
        weekday => weekday - 1,
    };
    date - Duration::days(i64::from(days_back))
}

/// Monday 00:00 up to the following Monday 00:00.
pub fn week_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let monday = week_start(date);
    (midnight(monday), midnight(monday + Duration::days(7)))
}

/// Half open range for two clicked days, in any order. Planners always get
/// the whole week of the earlier day.
pub fn selection_range(
    role: Option<Role>,
    first: NaiveDate,
    second: NaiveDate,
) -> (NaiveDateTime, NaiveDateTime) {
    let (start, end) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };

    match role {
        Some(Role::Planner) => week_bounds(start),
        _ => (midnight(start), midnight(end + Duration::days(1))),
    }
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let month = month_start(month);
    let shifted = if delta >= 0 {
        month.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        month.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(month)
}

pub fn month_title(month: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[month.month0() as usize], month.year())
}

/// Full Monday-first weeks covering the month of `month`.
pub fn month_grid(month: NaiveDate) -> Vec<Vec<NaiveDate>> {
    let first = month_start(month);
    let last = shift_month(first, 1) - Duration::days(1);

    let mut weeks = Vec::new();
    let mut monday = week_start(first);
    while monday <= last {
        weeks.push((0..7).map(|offset| monday + Duration::days(offset)).collect());
        monday += Duration::days(7);
    }
    weeks
}

/// Range of plans shown by the grid of `month`.
pub fn grid_bounds(month: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = week_start(month_start(month));
    let weeks = month_grid(month).len() as i64;
    (midnight(first), midnight(first + Duration::days(7 * weeks)))
}

pub fn display(value: &NaiveDateTime) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Stable hue for a user name.
pub fn user_hue(key: &str) -> u16 {
    let hash = key.chars().fold(0i32, |hash, c| {
        (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    (hash.unsigned_abs() % 360) as u16
}

pub fn user_color(key: &str, theme: Theme) -> String {
    hsl(user_hue(key), theme, None)
}

fn hsl(hue: u16, theme: Theme, alpha: Option<f32>) -> String {
    let (saturation, lightness) = match theme {
        Theme::Light => (65, 45),
        Theme::Dark => (55, 60),
    };
    match alpha {
        Some(alpha) => format!("hsla({hue}, {saturation}%, {lightness}%, {alpha})"),
        None => format!("hsl({hue}, {saturation}%, {lightness}%)"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub confirmed: bool,
    pub style: String,
    pub plan: Plan,
}

impl CalendarEvent {
    pub fn from_plan(plan: &Plan, theme: Theme) -> Self {
        let title = plan
            .assignee_name()
            .unwrap_or_else(|| "Unbekannt".to_string());
        let key = plan
            .assignee_username()
            .map(str::to_string)
            .unwrap_or_else(|| title.clone());
        let hue = user_hue(&key);

        let style = if plan.confirmed {
            let color = hsl(hue, theme, None);
            format!("background-color: {color}; border: 2px solid {color};")
        } else {
            format!(
                "background-color: {}; border: 2px dashed {}; opacity: 0.75;",
                hsl(hue, theme, Some(0.35)),
                hsl(hue, theme, None)
            )
        };

        Self {
            title,
            start: plan.start_date,
            end: plan.end_date,
            confirmed: plan.confirmed,
            style,
            plan: plan.clone(),
        }
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start < midnight(day + Duration::days(1)) && self.end > midnight(day)
    }
}

pub fn map_events(plans: &[Plan], theme: Theme) -> Vec<CalendarEvent> {
    plans
        .iter()
        .map(|plan| CalendarEvent::from_plan(plan, theme))
        .collect()
}

pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.covers(day))
        .cloned()
        .collect()
}

/// What the calendar page refetches when its month or theme changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    pub plans: bool,
    pub eligible: bool,
}

/// Mount and theme changes reload plans and eligible users. Paging the
/// month reloads plans only.
pub fn refresh_for(previous: Option<(NaiveDate, Theme)>, current: (NaiveDate, Theme)) -> Refresh {
    match previous {
        None => Refresh {
            plans: true,
            eligible: true,
        },
        Some((month, theme)) => Refresh {
            plans: month != current.0 || theme != current.1,
            eligible: theme != current.1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::datetime::{parse, to_local_iso};
    use testware::{at, create_test_plan, create_test_user};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn planner_snaps_every_day_of_the_week() {
        for day in 10..=16 {
            let (start, end) = selection_range(
                Some(Role::Planner),
                date(2024, 6, day),
                date(2024, 6, day),
            );
            assert_eq!(start, at(2024, 6, 10, 0), "day {day}");
            assert_eq!(end, at(2024, 6, 17, 0), "day {day}");
        }
    }

    #[test]
    fn planner_snaps_to_week_of_earlier_day() {
        let (start, end) = selection_range(
            Some(Role::Planner),
            date(2024, 6, 20),
            date(2024, 6, 12),
        );
        assert_eq!(start, at(2024, 6, 10, 0));
        assert_eq!(end, at(2024, 6, 17, 0));
    }

    #[test]
    fn admin_keeps_raw_selection() {
        let (start, end) =
            selection_range(Some(Role::Admin), date(2024, 6, 14), date(2024, 6, 12));
        assert_eq!(start, at(2024, 6, 12, 0));
        assert_eq!(end, at(2024, 6, 15, 0));

        let (start, end) = selection_range(None, date(2024, 6, 12), date(2024, 6, 12));
        assert_eq!(start, at(2024, 6, 12, 0));
        assert_eq!(end, at(2024, 6, 13, 0));
    }

    #[test]
    fn sunday_belongs_to_previous_monday() {
        assert_eq!(week_start(date(2024, 6, 16)), date(2024, 6, 10));
        assert_eq!(week_start(date(2024, 6, 17)), date(2024, 6, 17));
    }

    #[test]
    fn midnight_survives_iso_round_trip() {
        let start = midnight(date(2024, 3, 31));
        let iso = to_local_iso(&start);
        assert_eq!(iso, "2024-03-31T00:00:00");
        assert_eq!(parse(&iso), Some(start));
    }

    #[test]
    fn grid_covers_month_in_full_weeks() {
        let grid = month_grid(date(2024, 6, 12));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][0], date(2024, 5, 27));
        assert_eq!(grid[4][6], date(2024, 6, 30));
        assert!(grid.iter().all(|week| week.len() == 7));

        let february = month_grid(date(2021, 2, 1));
        assert_eq!(february.len(), 4);
    }

    #[test]
    fn grid_bounds_span_whole_weeks() {
        let (start, end) = grid_bounds(date(2024, 6, 12));
        assert_eq!(start, at(2024, 5, 27, 0));
        assert_eq!(end, at(2024, 7, 1, 0));
    }

    #[test]
    fn month_navigation() {
        assert_eq!(shift_month(date(2024, 1, 31), -1), date(2023, 12, 1));
        assert_eq!(shift_month(date(2024, 12, 5), 1), date(2025, 1, 1));
        assert_eq!(month_title(date(2024, 3, 1)), "März 2024");
    }

    #[test]
    fn colors_are_stable_per_user() {
        assert_eq!(user_hue("anna"), user_hue("anna"));
        assert!(user_hue("anna") < 360);
        assert_ne!(
            user_color("anna", Theme::Light),
            user_color("anna", Theme::Dark)
        );
    }

    #[test]
    fn events_from_plans() {
        let user = create_test_user(1, "anna", Role::Planner);
        let draft = create_test_plan(1, &user, at(2024, 6, 10, 0), false);
        let confirmed = create_test_plan(2, &user, at(2024, 6, 17, 0), true);

        let events = map_events(&[draft, confirmed], Theme::Light);
        assert_eq!(events[0].title, "anna Test");
        assert!(events[0].style.contains("dashed"));
        assert!(events[1].style.contains("solid"));

        assert_eq!(events_on(&events, date(2024, 6, 16)).len(), 1);
        assert_eq!(events_on(&events, date(2024, 6, 17)).len(), 1);
        assert_eq!(events_on(&events, date(2024, 6, 17))[0].plan.id, 2);
        assert!(events_on(&events, date(2024, 6, 24)).is_empty());
    }

    #[test]
    fn unassigned_plan_is_unknown() {
        let user = create_test_user(1, "anna", Role::Planner);
        let mut plan = create_test_plan(1, &user, at(2024, 6, 10, 0), false);
        plan.user = None;

        assert_eq!(CalendarEvent::from_plan(&plan, Theme::Dark).title, "Unbekannt");
    }

    #[test]
    fn theme_change_reloads_plans_and_users() {
        let june = date(2024, 6, 1);
        let july = date(2024, 7, 1);

        let mount = refresh_for(None, (june, Theme::Light));
        assert!(mount.plans && mount.eligible);

        let paged = refresh_for(Some((june, Theme::Light)), (july, Theme::Light));
        assert!(paged.plans);
        assert!(!paged.eligible);

        let themed = refresh_for(Some((july, Theme::Light)), (july, Theme::Dark));
        assert!(themed.plans && themed.eligible);

        let unchanged = refresh_for(Some((july, Theme::Dark)), (july, Theme::Dark));
        assert!(!unchanged.plans && !unchanged.eligible);
    }
}
