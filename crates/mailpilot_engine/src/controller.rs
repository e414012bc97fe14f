use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mailpilot_logging::{mp_debug, mp_warn};

use crate::{GenerationRequest, ReplyGenerator, SubmitError};

/// Single-flight wrapper around a [`ReplyGenerator`].
///
/// While a call is pending every further `submit` fails fast with
/// [`SubmitError::Busy`]. The busy flag is released by a drop guard, so it
/// clears on success, on failure, and when the future is dropped.
pub struct RequestController {
    generator: Arc<dyn ReplyGenerator>,
    busy: AtomicBool,
}

impl RequestController {
    pub fn new(generator: Arc<dyn ReplyGenerator>) -> Self {
        Self {
            generator,
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn submit(&self, request: &GenerationRequest) -> Result<String, SubmitError> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            mp_warn!("Rejected overlapping generation request");
            return Err(SubmitError::Busy);
        };
        let reply = self.generator.generate(request).await?;
        mp_debug!("Generation settled with {} chars", reply.chars().count());
        Ok(reply)
    }
}

struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
