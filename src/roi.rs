//! The "ROI, not guesswork" calculator shown on the services page.
//!
//! Inputs arrive as whatever the visitor typed. They are sanitised leniently rather than rejected:
//! the calculator always answers, it just answers with clamped numbers.

const MAX_INTEGER_INPUT: u64 = 1_000_000_000;

pub const DEFAULT_LEADS: &str = "40";
pub const DEFAULT_CLOSE_RATE: &str = "25";
pub const DEFAULT_PROJECT_VALUE: &str = "12000";
pub const DEFAULT_LIFT: &str = "15";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInputs {
    /// Leads per month.
    pub monthly_leads: u64,
    /// Percentage, `0..=100`.
    pub close_rate: f64,
    /// Average project value, in rand.
    pub project_value: u64,
    /// Expected conversion lift, percentage `0..=100`.
    pub conversion_lift: f64,
}

impl RoiInputs {
    pub fn from_raw(leads: &str, close_rate: &str, project_value: &str, lift: &str) -> Self {
        Self {
            monthly_leads: clamp_integer(leads),
            close_rate: clamp_percentage(close_rate),
            project_value: clamp_integer(project_value),
            conversion_lift: clamp_percentage(lift),
        }
    }

    /// Leads × close rate × average value × expected lift.
    pub fn estimate(&self) -> RoiEstimate {
        let monthly = self.monthly_leads as f64
            * (self.close_rate / 100.0)
            * self.project_value as f64
            * (self.conversion_lift / 100.0);
        RoiEstimate {
            monthly,
            yearly: monthly * 12.0,
        }
    }
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self::from_raw(
            DEFAULT_LEADS,
            DEFAULT_CLOSE_RATE,
            DEFAULT_PROJECT_VALUE,
            DEFAULT_LIFT,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiEstimate {
    pub monthly: f64,
    pub yearly: f64,
}

impl RoiEstimate {
    // Inputs are non-negative and capped, so the largest yearly figure (1.2e19) still fits.
    pub fn rounded_monthly(&self) -> u64 {
        self.monthly.round() as u64
    }

    pub fn rounded_yearly(&self) -> u64 {
        self.yearly.round() as u64
    }
}

/// Keeps digits only. A run of digits too long to parse is necessarily above the cap.
fn clamp_integer(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits
        .parse::<u64>()
        .map_or(MAX_INTEGER_INPUT, |n| n.min(MAX_INTEGER_INPUT))
}

/// Keeps digits and dots. Anything that is then not a number (`"1.2.3"`, `"."`) counts as zero.
fn clamp_percentage(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    kept.parse::<f64>().unwrap_or(0.0).clamp(0.0, 100.0)
}

/// Groups thousands with commas: `1234567` -> `1,234,567`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_zar(n: u64) -> String {
    format!("R{}", format_number(n))
}
