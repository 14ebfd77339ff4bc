//! Container bootstrap
//!
//! Builds a ready-to-use container from application configuration: the
//! container policy comes from `[container]` and the `[bindings]` table is
//! bulk-loaded through [`Container::load`].
//!
//! ```toml
//! [container]
//! load_mode = "strict"
//! max_depth = 32
//!
//! [bindings]
//! car = "Car"
//! Color = "Color"
//! ```
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().with_config_path("wirebox.toml").load()?;
//! let (container, report) = ContainerFactory::create(&config, TypeCatalog::linked())?;
//! ```

use std::sync::Arc;

use tracing::info;
use wirebox_domain::error::Result;
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::LoadEntry;

use super::{Container, LoadReport};
use crate::config::AppConfig;
use crate::config::loader::validate_app_config;

/// Composition root for containers built from configuration
pub struct ContainerFactory;

impl ContainerFactory {
    /// Build a container over `catalog` and load the configured bindings
    pub fn create<C: TypeIntrospector + 'static>(
        config: &AppConfig,
        catalog: C,
    ) -> Result<(Container, LoadReport)> {
        Self::create_shared(config, Arc::new(catalog))
    }

    /// Build a container over a shared catalog and load the configured bindings
    ///
    /// The configuration is validated first, so hand-built configs get the same
    /// checks as loaded ones.
    pub fn create_shared(
        config: &AppConfig,
        catalog: Arc<dyn TypeIntrospector>,
    ) -> Result<(Container, LoadReport)> {
        validate_app_config(config)?;
        let mut container = Container::from_shared(catalog, config.container.clone());
        let report = container.load(
            config
                .bindings
                .iter()
                .map(|(key, type_name)| LoadEntry::keyed(key.as_str(), type_name.as_str())),
        )?;

        info!(
            bindings = container.len(),
            load_mode = ?config.container.load_mode,
            "Container ready"
        );
        Ok((container, report))
    }
}
