use chrono::{Datelike, NaiveDate};

/// Expand `YYYY-MM-DD`, `YYYY-MM` or `YYYY` into its first and last day.
pub fn bounds_of_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| invalid(p))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| invalid(p))?;
        return Ok((first, last));
    }

    Err(invalid(p))
}

/// Resolve a period filter: single period or `A:B` range of periods.
pub fn resolve_range(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = bounds_of_period(a)?;
        let (_, end) = bounds_of_period(b)?;
        if end < start {
            return Err(format!("Invalid range: {} ends before it starts", p));
        }
        return Ok((start, end));
    }
    bounds_of_period(p)
}

pub fn month_bounds(d: NaiveDate) -> Result<(NaiveDate, NaiveDate), String> {
    let first = d.with_day(1).ok_or_else(|| invalid(&d.to_string()))?;
    Ok((first, last_day_of_month(d.year(), d.month())?))
}

fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, String> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| format!("Invalid month: {year}-{month:02}"))
}

fn invalid(p: &str) -> String {
    format!("Invalid period: {}", p)
}
