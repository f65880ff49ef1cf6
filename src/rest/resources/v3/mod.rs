//! Resource models for version 3 of the VoltTime API.

mod charger;
mod connector;
mod product;
mod provider;
mod site;
mod tariff;
mod transaction;
mod user;

pub use charger::{ChargePoint, Charger, ChargerLicenses};
pub use connector::{ConnectorMeterValue, ConnectorPowerUsage, MeterValue, SampledValue};
pub use product::Product;
pub use provider::Provider;
pub use site::{LoadManagement, Site, SiteCapabilities};
pub use tariff::{Tariff, TariffRequest};
pub use transaction::{ChargeSession, Transaction};
pub use user::{IntercomHashes, User};
