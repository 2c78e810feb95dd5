//! Density of seawater samples with the TEOS-10 equation of state.
//!
//! Absolute Salinity is taken equal to Reference Salinity (no Absolute
//! Salinity Anomaly atlas), potential temperature at 0 dbar follows the
//! Fofonoff & Millard (1983) integration of the adiabatic lapse rate, and
//! Conservative Temperature, in situ density and sigma0 come from the `gsw`
//! 75-term expressions.
use crate::errors::{StoichError, StoichResult};
use gsw::conversions::{ct_from_pt, sr_from_sp, t68_from_t90, t90_from_t68};
use gsw::volume::{rho, sigma0};

fn gsw_error(what: &str, e: gsw::Error) -> StoichError {
    StoichError::Seawater(format!("{}: {:?}", what, e))
}

/// Absolute Salinity [g/kg] from Practical Salinity
#[allow(non_snake_case)]
pub fn absolute_salinity(SP: f64) -> f64 {
    sr_from_sp(SP)
}

/// Adiabatic lapse rate [°C/dbar], UNESCO 1983. `t` is IPTS-68 temperature.
#[allow(non_snake_case)]
pub fn adiabatic_lapse_rate(SP: f64, t: f64, p: f64) -> f64 {
    let ds = SP - 35.0;
    (((-2.1687e-16 * t + 1.8676e-14) * t - 4.6206e-13) * p
        + ((2.7759e-12 * t - 1.1351e-10) * ds
            + ((-5.4481e-14 * t + 8.733e-12) * t - 6.7795e-10) * t
            + 1.8741e-8))
        * p
        + (-4.2393e-8 * t + 1.8932e-6) * ds
        + ((6.6228e-10 * t - 6.836e-8) * t + 8.5258e-6) * t
        + 3.5803e-5
}

/// Potential temperature referenced to `p_ref`, fourth order Runge-Kutta over
/// the lapse rate. Temperatures on the IPTS-68 scale.
#[allow(non_snake_case)]
pub fn potential_temperature(SP: f64, t: f64, p: f64, p_ref: f64) -> f64 {
    let h = p_ref - p;
    let mut xk = h * adiabatic_lapse_rate(SP, t, p);
    let mut theta = t + 0.5 * xk;
    let mut q = xk;
    let mut pressure = p + 0.5 * h;

    xk = h * adiabatic_lapse_rate(SP, theta, pressure);
    theta += 0.29289322 * (xk - q);
    q = 0.58578644 * xk + 0.121320344 * q;

    xk = h * adiabatic_lapse_rate(SP, theta, pressure);
    theta += 1.707106781 * (xk - q);
    q = 3.414213562 * xk - 4.121320344 * q;

    pressure += 0.5 * h;
    xk = h * adiabatic_lapse_rate(SP, theta, pressure);
    theta + (xk - 2.0 * q) / 6.0
}

/// Conservative Temperature [°C] from in situ temperature (ITS-90) at pressure `p` [dbar]
#[allow(non_snake_case)]
pub fn conservative_temperature(SA: f64, SP: f64, t: f64, p: f64) -> StoichResult<f64> {
    let pt0 = t90_from_t68(potential_temperature(SP, t68_from_t90(t), p, 0.0));
    ct_from_pt(SA, pt0).map_err(|e| gsw_error("Conservative Temperature", e))
}

/// In situ density [kg/m3]
#[allow(non_snake_case)]
pub fn in_situ_density(SA: f64, CT: f64, p: f64) -> StoichResult<f64> {
    rho(SA, CT, p).map_err(|e| gsw_error("in situ density", e))
}

/// Potential density anomaly referenced to 0 dbar [kg/m3]
#[allow(non_snake_case)]
pub fn potential_density_anomaly(SA: f64, CT: f64) -> StoichResult<f64> {
    sigma0(SA, CT).map_err(|e| gsw_error("sigma0", e))
}

/// (rho, sigma0) of a sample given practical salinity, in situ temperature and pressure
#[allow(non_snake_case)]
pub fn density(SP: f64, t: f64, p: f64) -> StoichResult<(f64, f64)> {
    let SA = absolute_salinity(SP);
    let CT = conservative_temperature(SA, SP, t, p)?;
    Ok((in_situ_density(SA, CT, p)?, potential_density_anomaly(SA, CT)?))
}
