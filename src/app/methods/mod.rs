//! One function per CMCI resource action. Each validates its parameter bag,
//! addresses the resource table and issues exactly one request.

pub mod csd_group;
pub mod define;
pub mod delete;
pub mod discard;
pub mod enable;
pub mod get;
pub mod install;
pub mod refresh;

pub use csd_group::{add_csd_group_to_list, remove_csd_group_from_list};
pub use define::{
    define_program, define_transaction, define_urimap_client, define_urimap_pipeline,
    define_urimap_server, define_webservice,
};
pub use delete::{delete_program, delete_transaction, delete_urimap, delete_webservice};
pub use discard::{discard_program, discard_transaction, discard_urimap};
pub use enable::{disable_urimap, enable_urimap};
pub use get::get_resource;
pub use install::{install_program, install_transaction, install_urimap, install_webservice};
pub use refresh::refresh_program;

use crate::core::rest_client::CmciResource;

pub(crate) const REGION_LABEL: &str = "CICS Region name";
pub(crate) const CSD_GROUP_LABEL: &str = "CICS CSD Group";

/// A CSD definition addressed by name within its group.
pub(crate) fn csd_definition(
    table: &str,
    name: &str,
    csd_group: &str,
    cics_plex: Option<&str>,
    region_name: &str,
) -> CmciResource {
    CmciResource::new(table)
        .scope(cics_plex, region_name)
        .criteria(format!("(NAME={})", name))
        .parameter(format!("CSDGROUP({})", csd_group))
}

/// An installed resource selected by one key attribute, e.g. `PROGRAM`.
pub(crate) fn installed_resource(
    table: &str,
    key: &str,
    name: &str,
    cics_plex: Option<&str>,
    region_name: &str,
) -> CmciResource {
    CmciResource::new(table)
        .scope(cics_plex, region_name)
        .criteria(format!("({}={})", key, name))
}
