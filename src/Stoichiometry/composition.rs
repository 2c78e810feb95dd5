//! Organic matter compositions and the named composition methods.
use crate::errors::{StoichError, StoichResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elemental composition of organic matter, moles of each element per mole of OM
/// (phosphorus normalized to 1). H and O are known only for the literature
/// compositions; otherwise the carbon oxidation state `Cox` and the `charge`
/// determine the combined term 2O-H.
///
/// Precondition: `C > 0`. It is not checked, the R matrix divides by C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Composition {
    pub C: f64,
    #[serde(default)]
    pub H: Option<f64>,
    #[serde(default)]
    pub O: Option<f64>,
    pub N: f64,
    pub P: f64,
    #[serde(default)]
    pub charge: f64,
    #[serde(default)]
    pub Cox: f64,
    /// O2 demand of aerobic respiration of this OM, informational only
    #[serde(default)]
    pub O2: Option<f64>,
}

/// Which mass balance equations can be solved for the composition
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub enum FormulaFamily {
    /// both H and O are known
    ClosedForm { H: f64, O: f64 },
    /// only 2O-H is known, water terms stay undetermined
    Reduced,
}

/// Phosphate multiplier of the N* row of the R matrix.
/// The literature compositions use the Redfield N:P of 16 while the experimental
/// composition and the oxidation state sweeps use their own N:P.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NstarConvention {
    /// k = 16
    Redfield,
    /// k = N of the composition
    Composition,
}

impl NstarConvention {
    pub fn phosphate_multiplier(&self, composition: &Composition) -> f64 {
        match self {
            NstarConvention::Redfield => 16.0,
            NstarConvention::Composition => composition.N,
        }
    }
}

impl Composition {
    /// composition with unresolved H and O
    #[allow(non_snake_case)]
    pub fn new(C: f64, N: f64, P: f64, charge: f64, Cox: f64) -> Self {
        Self {
            C,
            H: None,
            O: None,
            N,
            P,
            charge,
            Cox,
            O2: None,
        }
    }

    /// Redfield et al. (1963) organic matter C106 H263 O110 N16 P
    pub fn redfield() -> Self {
        Self {
            C: 106.0,
            H: Some(263.0),
            O: Some(110.0),
            N: 16.0,
            P: 1.0,
            charge: 0.0,
            Cox: 0.0,
            O2: Some(138.0),
        }
    }

    /// Anderson (1995) organic matter C106 H175 O42 N16 P
    pub fn anderson() -> Self {
        Self {
            C: 106.0,
            H: Some(175.0),
            O: Some(42.0),
            N: 16.0,
            P: 1.0,
            charge: 0.0,
            Cox: -0.45,
            O2: Some(150.0),
        }
    }

    /// C:N:P and carbon oxidation state estimated from the oxycline data of the FK180624 cruise
    pub fn experimental() -> Self {
        Self::new(113.1, 11.23, 1.0, 0.0, 0.77)
    }

    /// fixed composition of the `oxidation_states` sweep
    pub fn oxidation_sweep_base() -> Self {
        Self::new(112.5, 11.4, 1.0, 0.0, 0.0)
    }

    /// fixed composition of the `redfield_oxidation_states` sweep
    pub fn redfield_sweep_base() -> Self {
        Self::new(106.0, 16.0, 1.0, 0.0, 0.0)
    }

    /// same C, N, P and charge with another carbon oxidation state
    #[allow(non_snake_case)]
    pub fn with_cox(&self, Cox: f64) -> Self {
        Self {
            Cox,
            ..self.clone()
        }
    }

    #[allow(non_snake_case)]
    pub fn family(&self) -> FormulaFamily {
        match (self.H, self.O) {
            (Some(H), Some(O)) => FormulaFamily::ClosedForm { H, O },
            _ => FormulaFamily::Reduced,
        }
    }

    /// 2O - H from the charge and redox balance of the OM
    #[allow(non_snake_case)]
    pub fn twoO_minus_H(&self) -> f64 {
        self.Cox * self.C - self.charge - 3.0 * self.N + 5.0 * self.P
    }
}

/// Choice of organic matter stoichiometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Experimental,
    Anderson,
    Redfield,
    OxidationStates,
    RedfieldOxidationStates,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Experimental,
        Method::Anderson,
        Method::Redfield,
        Method::OxidationStates,
        Method::RedfieldOxidationStates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Experimental => "experimental",
            Method::Anderson => "anderson",
            Method::Redfield => "redfield",
            Method::OxidationStates => "oxidation_states",
            Method::RedfieldOxidationStates => "redfield_oxidation_states",
        }
    }

    pub fn is_sweep(&self) -> bool {
        matches!(
            self,
            Method::OxidationStates | Method::RedfieldOxidationStates
        )
    }

    pub fn nstar_convention(&self) -> NstarConvention {
        match self {
            Method::Anderson | Method::Redfield => NstarConvention::Redfield,
            Method::Experimental
            | Method::OxidationStates
            | Method::RedfieldOxidationStates => NstarConvention::Composition,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = StoichError;

    fn from_str(s: &str) -> StoichResult<Self> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| StoichError::InvalidMethod(s.to_string()))
    }
}
