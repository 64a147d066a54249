use crate::config::GlobalConfig;
use crate::data_model::settings::AppSettings;
use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "plugwatch")]
#[command(about = "Well plug tracking and rental billing dashboard", long_about = None)]
pub struct CliArgs {
    /// Company name shown in the admin header
    #[arg(long, value_name = "NAME")]
    company: Option<String>,

    /// UI refresh rate (Hz); the elapsed readouts tick at this rate
    #[arg(long, default_value_t = 1)]
    refresh_hz: u16,

    /// Regular per-day rental rate
    #[arg(long, value_name = "AMOUNT")]
    regular_rate: Option<f64>,

    /// Discounted per-day rate applied past the tier boundary
    /// (defaults to half the regular rate)
    #[arg(long, value_name = "AMOUNT")]
    discounted_rate: Option<f64>,

    /// Billable days charged at the regular rate before the discount applies
    #[arg(long, value_name = "DAYS")]
    discount_after: Option<u32>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("ui refresh rate must be greater than zero (got {value})")]
    InvalidRefreshHz { value: u16 },
    #[error("{flag} must be greater than zero (got {value})")]
    InvalidRate { flag: &'static str, value: f64 },
}

pub fn load_from_cli() -> Result<AppSettings, SettingsError> {
    let args = CliArgs::parse();
    from_args(args)
}

pub fn from_args(args: CliArgs) -> Result<AppSettings, SettingsError> {
    if args.refresh_hz == 0 {
        return Err(SettingsError::InvalidRefreshHz {
            value: args.refresh_hz,
        });
    }

    for (flag, value) in [
        ("--regular-rate", args.regular_rate),
        ("--discounted-rate", args.discounted_rate),
    ] {
        if let Some(value) = value
            && value <= 0.0
        {
            return Err(SettingsError::InvalidRate { flag, value });
        }
    }

    Ok(AppSettings {
        refresh_hz: args.refresh_hz,
        company: args.company,
        regular_rate: args.regular_rate,
        discounted_rate: args.discounted_rate,
        discount_after_days: args.discount_after,
    })
}

pub fn apply_global(settings: &AppSettings, global: &mut GlobalConfig) {
    global.ui_refresh_hz = settings.refresh_hz;
    if let Some(company) = &settings.company {
        global.company_name = company.clone();
    }
    if let Some(regular) = settings.regular_rate {
        global.rates.regular_per_day = regular;
        global.rates.discounted_per_day = settings.discounted_rate.unwrap_or(regular / 2.0);
    } else if let Some(discounted) = settings.discounted_rate {
        global.rates.discounted_per_day = discounted;
    }
    if let Some(days) = settings.discount_after_days {
        global.rates.discount_after_days = days;
    }
}

#[cfg(test)]
mod tests {
    use super::{SettingsError, apply_global, from_args};
    use crate::config::GlobalConfig;

    fn args(
        refresh_hz: u16,
        regular_rate: Option<f64>,
        discounted_rate: Option<f64>,
    ) -> super::CliArgs {
        super::CliArgs {
            company: None,
            refresh_hz,
            regular_rate,
            discounted_rate,
            discount_after: None,
        }
    }

    #[test]
    fn from_args_keeps_defaults() {
        let settings = from_args(args(1, None, None)).expect("settings");
        assert_eq!(settings.refresh_hz, 1);
        assert!(settings.regular_rate.is_none());
    }

    #[test]
    fn from_args_rejects_zero_refresh_hz() {
        let err = from_args(args(0, None, None)).expect_err("should error");
        match err {
            SettingsError::InvalidRefreshHz { value } => assert_eq!(value, 0),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_args_rejects_non_positive_rates() {
        assert!(from_args(args(1, Some(0.0), None)).is_err());
        assert!(from_args(args(1, None, Some(-5.0))).is_err());
    }

    #[test]
    fn apply_global_halves_regular_rate_when_discount_omitted() {
        let settings = from_args(args(1, Some(80.0), None)).expect("settings");
        let mut global = GlobalConfig::default();
        apply_global(&settings, &mut global);
        assert_eq!(global.rates.regular_per_day, 80.0);
        assert_eq!(global.rates.discounted_per_day, 40.0);
    }

    #[test]
    fn apply_global_keeps_persisted_rates_without_flags() {
        let settings = from_args(args(2, None, None)).expect("settings");
        let mut global = GlobalConfig::default();
        global.rates.regular_per_day = 99.0;
        apply_global(&settings, &mut global);
        assert_eq!(global.ui_refresh_hz, 2);
        assert_eq!(global.rates.regular_per_day, 99.0);
    }

    #[test]
    fn apply_global_sets_company_name() {
        let mut settings = from_args(args(1, None, None)).expect("settings");
        settings.company = Some("Acme Plugs".to_string());
        let mut global = GlobalConfig::default();
        apply_global(&settings, &mut global);
        assert_eq!(global.company_name, "Acme Plugs");
    }
}
