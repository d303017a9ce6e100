use error_stack::{AttachmentKind, FrameKind};

use kernel::KernelError;

/// Logs a rejected operation together with its printable attachments.
pub(crate) trait Diagnose: Sized {
    fn diagnose(self, operation: &'static str) -> Self;
}

impl<T> Diagnose for error_stack::Result<T, KernelError> {
    fn diagnose(self, operation: &'static str) -> Self {
        if let Err(report) = &self {
            let details = report
                .frames()
                .filter_map(|frame| match frame.kind() {
                    FrameKind::Attachment(AttachmentKind::Printable(printable)) => {
                        Some(printable.to_string())
                    }
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(operation, error = %report.current_context(), "{details}");
        }
        self
    }
}
