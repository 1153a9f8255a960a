//! Dakota analysis method descriptors.
//!
//! Each descriptor holds the typed parameters of one analysis method and
//! renders them into the five blocks of a Dakota input file. Descriptors are
//! selected by name through the static [`registry`].

macro_rules! descriptor_plumbing {
    () => {
        fn name(&self) -> &'static str {
            Self::NAME
        }

        fn settings(&self) -> &$crate::settings::Settings {
            &self.settings
        }

        fn settings_mut(&mut self) -> &mut $crate::settings::Settings {
            &mut self.settings
        }

        fn fields(&self) -> Result<::serde_yaml::Mapping, ::dakota_core::errors::DakotaError> {
            $crate::schema::to_mapping(self)
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

mod centered;
pub mod format;
mod method;
mod multidim;
mod polynomial_chaos;
pub mod registry;
mod sampling;
pub mod schema;
mod settings;
mod vector;

pub use centered::CenteredParameterStudy;
pub use method::{blocks, export, input_text, Method, METHOD_KEY};
pub use multidim::MultidimParameterStudy;
pub use polynomial_chaos::PolynomialChaos;
pub use registry::{build_method, default_method, lookup, method_names, methods, MethodEntry};
pub use sampling::{SampleType, Sampling};
pub use settings::{InterfaceKind, Settings, DEFAULT_CONFIGURATION_FILE};
pub use vector::VectorParameterStudy;
