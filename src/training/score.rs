use slog::Logger;

use crate::syntax::transition::DependencySet;

#[derive(Debug)]
pub struct ZeroDivisionError;

/// Unlabeled and labeled attachment scores over any number of sentences.
#[derive(Debug)]
pub struct AttachmentScore {
    logger: Option<Logger>,
    head_correct: u32,
    label_correct: u32,
    total: u32,
}

impl AttachmentScore {
    pub fn new() -> Self {
        AttachmentScore {
            logger: None,
            head_correct: 0,
            label_correct: 0,
            total: 0,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn reset(&mut self) {
        self.head_correct = 0;
        self.label_correct = 0;
        self.total = 0;
    }

    /// Counts every gold dependency once.
    pub fn count(&mut self, predicted: &DependencySet, gold: &DependencySet) {
        for dependency in gold.iter() {
            if let Some(p) = predicted.get(dependency.dependent) {
                if p.head == dependency.head {
                    self.head_correct += 1;
                    if p.relation == dependency.relation {
                        self.label_correct += 1;
                    }
                }
            }
            self.total += 1;
        }
    }

    pub fn uas(&self) -> Result<f32, ZeroDivisionError> {
        self.ratio(self.head_correct)
    }

    pub fn las(&self) -> Result<f32, ZeroDivisionError> {
        self.ratio(self.label_correct)
    }

    fn ratio(&self, correct: u32) -> Result<f32, ZeroDivisionError> {
        if self.total > 0 {
            Ok((correct as f32) / (self.total as f32))
        } else {
            Err(ZeroDivisionError)
        }
    }

    pub fn report(&self, label: &str) {
        let logger = match self.logger {
            Some(ref logger) => logger,
            None => return,
        };
        match (self.uas(), self.las()) {
            (Ok(uas), Ok(las)) => {
                info!(
                    logger,
                    "[{}] #dependencies: {}, UAS: {:.4}, LAS: {:.4}",
                    label,
                    self.total,
                    uas,
                    las
                );
            }
            _ => {
                info!(logger, "[{}] #dependencies: 0, UAS: NaN, LAS: NaN", label);
            }
        }
    }
}

impl Default for AttachmentScore {
    fn default() -> Self {
        AttachmentScore::new()
    }
}
