//! Mapping from parsed CLI arguments plus the resolved target to the
//! parameter bags the API methods take.

use crate::config::cli::{
    CsdGroupListArgs, DefineTransactionArgs, DefineWebServiceArgs, ProgramDefinitionArgs,
    ProgramNameArgs, ResourceArgs, TransactionDefinitionArgs, TransactionNameArgs, UrimapArgs,
    UrimapClientArgs, UrimapDefinitionArgs, UrimapNameArgs, UrimapPipelineArgs, UrimapServerArgs,
    WebServiceDefinitionArgs,
};
use crate::domain::model::{
    CsdGroupParms, ProgramParms, ResourceParms, TransactionParms, UrimapParms, WebServiceParms,
};
use crate::domain::ports::TargetProvider;

fn region(target: &dyn TargetProvider) -> String {
    target.region_name().to_string()
}

fn plex(target: &dyn TargetProvider) -> Option<String> {
    target.cics_plex().map(str::to_string)
}

impl ProgramDefinitionArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> ProgramParms {
        ProgramParms {
            name: self.program_name.clone(),
            csd_group: Some(self.csd_group.clone()),
            region_name: region(target),
            cics_plex: plex(target),
        }
    }
}

impl ProgramNameArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> ProgramParms {
        ProgramParms {
            name: self.program_name.clone(),
            csd_group: None,
            region_name: region(target),
            cics_plex: plex(target),
        }
    }
}

impl DefineTransactionArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> TransactionParms {
        TransactionParms {
            name: self.transaction_name.clone(),
            program_name: Some(self.program_name.clone()),
            csd_group: Some(self.csd_group.clone()),
            region_name: region(target),
            cics_plex: plex(target),
        }
    }
}

impl TransactionDefinitionArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> TransactionParms {
        TransactionParms {
            name: self.transaction_name.clone(),
            program_name: None,
            csd_group: Some(self.csd_group.clone()),
            region_name: region(target),
            cics_plex: plex(target),
        }
    }
}

impl TransactionNameArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> TransactionParms {
        TransactionParms {
            name: self.transaction_name.clone(),
            region_name: region(target),
            cics_plex: plex(target),
            ..TransactionParms::default()
        }
    }
}

impl UrimapArgs {
    fn to_parms(&self, target: &dyn TargetProvider) -> UrimapParms {
        UrimapParms {
            name: self.urimap_name.clone(),
            csd_group: Some(self.csd_group.clone()),
            path: Some(self.urimap_path.clone()),
            host: Some(self.urimap_host.clone()),
            scheme: self.urimap_scheme.clone(),
            description: self.description.clone(),
            enable: self.enable,
            region_name: region(target),
            cics_plex: plex(target),
            ..UrimapParms::default()
        }
    }
}

impl UrimapServerArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> UrimapParms {
        UrimapParms {
            program_name: Some(self.program_name.clone()),
            transaction_name: self.transaction_name.clone(),
            tcpipservice: self.tcpipservice.clone(),
            ..self.urimap.to_parms(target)
        }
    }
}

impl UrimapClientArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> UrimapParms {
        UrimapParms {
            authenticate: self.authenticate.clone(),
            certificate: self.certificate.clone(),
            ..self.urimap.to_parms(target)
        }
    }
}

impl UrimapPipelineArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> UrimapParms {
        UrimapParms {
            pipeline_name: Some(self.pipeline_name.clone()),
            transaction_name: self.transaction_name.clone(),
            webservice_name: self.webservice_name.clone(),
            tcpipservice: self.tcpipservice.clone(),
            ..self.urimap.to_parms(target)
        }
    }
}

impl UrimapDefinitionArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> UrimapParms {
        UrimapParms {
            name: self.urimap_name.clone(),
            csd_group: Some(self.csd_group.clone()),
            region_name: region(target),
            cics_plex: plex(target),
            ..UrimapParms::default()
        }
    }
}

impl UrimapNameArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> UrimapParms {
        UrimapParms {
            name: self.urimap_name.clone(),
            region_name: region(target),
            cics_plex: plex(target),
            ..UrimapParms::default()
        }
    }
}

impl DefineWebServiceArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> WebServiceParms {
        WebServiceParms {
            name: self.webservice_name.clone(),
            csd_group: self.csd_group.clone(),
            pipeline_name: self.pipeline_name.clone(),
            wsbind: self.wsbind.clone(),
            validation: self.validation,
            description: self.description.clone(),
            region_name: region(target),
            cics_plex: plex(target),
        }
    }
}

impl WebServiceDefinitionArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> WebServiceParms {
        WebServiceParms {
            name: self.webservice_name.clone(),
            csd_group: self.csd_group.clone(),
            region_name: region(target),
            cics_plex: plex(target),
            ..WebServiceParms::default()
        }
    }
}

impl ResourceArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> ResourceParms {
        ResourceParms {
            name: self.resource_name.clone(),
            criteria: self.criteria.clone(),
            parameter: self.parameter.clone(),
            fail_on_no_data: self.fail_on_no_data,
            region_name: region(target),
            cics_plex: plex(target),
        }
    }
}

impl CsdGroupListArgs {
    pub fn to_parms(&self, target: &dyn TargetProvider) -> CsdGroupParms {
        CsdGroupParms {
            name: self.name.clone(),
            csd_list: self.csd_list.clone(),
            region_name: region(target),
            cics_plex: plex(target),
        }
    }
}
