//! Notifier that writes notices to the defmt log

use defmt::*;
use fixclock_core::traits::{Notice, Notifier, Severity};

pub struct DefmtNotifier;

impl Notifier for DefmtNotifier {
    fn notify(&mut self, notice: Notice) {
        let message = notice.message();
        match notice.severity() {
            Severity::Info => info!("{}", message),
            Severity::Warning => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
        debug!("notice: {:?}", notice);
    }
}
