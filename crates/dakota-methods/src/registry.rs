//! Static table of supported analysis methods.

use dakota_core::errors::{DakotaError, ErrorInfo};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Mapping;

use crate::centered::CenteredParameterStudy;
use crate::method::Method;
use crate::multidim::MultidimParameterStudy;
use crate::polynomial_chaos::PolynomialChaos;
use crate::sampling::Sampling;
use crate::schema::from_kwargs;
use crate::vector::VectorParameterStudy;

type Factory = fn(Mapping) -> Result<Box<dyn Method>, DakotaError>;

/// A registered method: its name, a one-line summary and its constructor.
#[derive(Clone, Copy)]
pub struct MethodEntry {
    /// Name used to select the method.
    pub name: &'static str,
    /// Short description shown by listings.
    pub summary: &'static str,
    factory: Factory,
}

impl MethodEntry {
    /// Constructs the descriptor from keyword arguments.
    pub fn build(&self, kwargs: Mapping) -> Result<Box<dyn Method>, DakotaError> {
        (self.factory)(kwargs)
    }
}

impl std::fmt::Debug for MethodEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodEntry")
            .field("name", &self.name)
            .field("summary", &self.summary)
            .finish()
    }
}

fn boxed<T>(kwargs: Mapping) -> Result<Box<dyn Method>, DakotaError>
where
    T: Method + Default + Serialize + DeserializeOwned,
{
    Ok(Box::new(from_kwargs::<T>(kwargs)?))
}

const METHODS: &[MethodEntry] = &[
    MethodEntry {
        name: VectorParameterStudy::NAME,
        summary: "equal steps from an initial point toward a final point",
        factory: boxed::<VectorParameterStudy>,
    },
    MethodEntry {
        name: CenteredParameterStudy::NAME,
        summary: "steps along each axis around a center point",
        factory: boxed::<CenteredParameterStudy>,
    },
    MethodEntry {
        name: MultidimParameterStudy::NAME,
        summary: "full factorial grid over bounded variables",
        factory: boxed::<MultidimParameterStudy>,
    },
    MethodEntry {
        name: Sampling::NAME,
        summary: "Monte Carlo or Latin hypercube sampling",
        factory: boxed::<Sampling>,
    },
    MethodEntry {
        name: PolynomialChaos::NAME,
        summary: "polynomial chaos expansion by quadrature",
        factory: boxed::<PolynomialChaos>,
    },
];

/// Every registered method, in listing order.
pub fn methods() -> &'static [MethodEntry] {
    METHODS
}

/// Names of every registered method.
pub fn method_names() -> impl Iterator<Item = &'static str> {
    METHODS.iter().map(|entry| entry.name)
}

/// Resolves a method name to its registry entry.
pub fn lookup(name: &str) -> Result<&'static MethodEntry, DakotaError> {
    METHODS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| {
            DakotaError::Method(
                ErrorInfo::new("dakota_methods.unknown_method", "method not found")
                    .with_context("method", name)
                    .with_hint(format!(
                        "registered methods: {}",
                        method_names().collect::<Vec<_>>().join(", ")
                    )),
            )
        })
}

/// Resolves `name` and constructs the descriptor from `kwargs`.
pub fn build_method(name: &str, kwargs: Mapping) -> Result<Box<dyn Method>, DakotaError> {
    lookup(name)?.build(kwargs)
}

/// The vector parameter study with its built-in Rosenbrock defaults.
pub fn default_method() -> Box<dyn Method> {
    Box::new(VectorParameterStudy::default())
}
