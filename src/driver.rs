//! Action dispatch
//!
//! Every requested action runs, in a fixed order: install, uninstall,
//! `--all`, `--all-install`, interactive mode, then the individual checks in
//! menu order.

use crate::checks::{AuditContext, Check, CheckKind};
use crate::error::Result;
use crate::installer::{AUDIT_TOOLS, Installer};
use crate::interactive::{Prompt, interactive_mode};
use crate::progress::run_batch;
use hostaudit_common::PackageProfile;
use std::io::Write;
use tracing::info;

/// What the operator asked for, independent of how it was parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actions {
    pub install: Vec<String>,
    pub uninstall: Vec<String>,
    pub all: bool,
    pub all_install: bool,
    pub interactive: bool,
    /// Individually requested checks, in menu order
    pub checks: Vec<CheckKind>,
}

impl Actions {
    pub fn is_empty(&self) -> bool {
        self.install.is_empty()
            && self.uninstall.is_empty()
            && !self.all
            && !self.all_install
            && !self.interactive
            && self.checks.is_empty()
    }
}

/// Collaborators shared by every action
pub struct Driver<'a> {
    pub profile: &'a PackageProfile,
    pub ctx: &'a AuditContext<'a>,
    /// Checks in [`CheckKind`] order
    pub menu: &'a [Box<dyn Check>],
}

impl Driver<'_> {
    pub fn dispatch(
        &self,
        actions: &Actions,
        prompt: &mut dyn Prompt,
        out: &mut dyn Write,
    ) -> Result<()> {
        let installer = Installer::new(self.profile, self.ctx.runner);
        let every_check: Vec<usize> = (0..self.menu.len()).collect();

        for tool in &actions.install {
            installer.install(tool, out)?;
        }

        for tool in &actions.uninstall {
            installer.uninstall(tool, out)?;
        }

        if actions.all {
            info!("Running all checks");
            run_batch(self.menu, &every_check, self.ctx, out, "Running All Checks")?;
        }

        if actions.all_install {
            info!("Installing audit tools and running all checks");
            for tool in AUDIT_TOOLS {
                installer.install(tool, out)?;
            }
            run_batch(
                self.menu,
                &every_check,
                self.ctx,
                out,
                "Installing Tools and Running All Checks",
            )?;
        }

        if actions.interactive {
            interactive_mode(self.menu, self.ctx, prompt, out)?;
        }

        for kind in &actions.checks {
            if let Some(check) = self.menu.get(kind.index()) {
                check.run(self.ctx, out)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}
