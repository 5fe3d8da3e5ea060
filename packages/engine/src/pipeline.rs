//! # Pipeline Orchestrator
//!
//! Sequences the stages over one message body: prune quotes, strip the
//! sender's leftover signature, park the caret relative to the user's own
//! signature, clean up stray whitespace, then hand attribution to its
//! collaborator and normalize the cursor. One run per compose-window load,
//! synchronous, on the thread that owns the editor; no stage is ever
//! re-entered.
//!
//! The public entry point doubles as the failure boundary: outside debug
//! mode no error escapes into the host's editing session. A failed run is
//! logged and reported as an unchanged document, and the message stays
//! editable.

use quotefix_dom::Document;
use tracing::{debug, error, warn};

use crate::attribution::Attributor;
use crate::cleanup::cleanup_layout;
use crate::config::Config;
use crate::cursor::{CursorCommand, PipelineResult};
use crate::error::EngineResult;
use crate::matcher::SignatureMatcher;
use crate::message::MessageKind;
use crate::place::place_above_new_signature;
use crate::prune::prune_quotes;
use crate::signature::remove_old_signature;

/// Pipeline over one message body. Configuration and matcher are captured
/// at construction; runs share no other state.
pub struct Pipeline<'a> {
    config: Config,
    matcher: SignatureMatcher,
    attributor: Option<&'a dyn Attributor>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: Config, matcher: SignatureMatcher) -> Self {
        Pipeline {
            config,
            matcher,
            attributor: None,
        }
    }

    /// Attach the attribution collaborator.
    pub fn with_attributor(mut self, attributor: &'a dyn Attributor) -> Self {
        self.attributor = Some(attributor);
        self
    }

    /// Run the pipeline over one document.
    ///
    /// This is the failure boundary: outside debug mode any error is logged
    /// and swallowed, and the host sees an unchanged-document result.
    pub fn run(&self, doc: &Document, kind: MessageKind) -> EngineResult<PipelineResult> {
        match self.run_inner(doc, kind) {
            Ok(result) => Ok(result),
            Err(err) if !self.config.debug => {
                error!(error = %err, "pipeline failed, leaving compose session alone");
                Ok(PipelineResult::unchanged())
            }
            Err(err) => Err(err),
        }
    }

    fn run_inner(&self, doc: &Document, kind: MessageKind) -> EngineResult<PipelineResult> {
        let mut cursor_ops = Vec::new();
        let mut mutated = false;

        let original_html = if self.config.debug {
            doc.body().map(|body| body.inner_html())
        } else {
            None
        };

        if self.config.enabled {
            // later commands are relative to the end of the document
            cursor_ops.push(CursorCommand::MoveToEnd);

            if self.config.remove_quotes {
                let level = self.config.remove_quotes_level.max(1);
                debug!(level, "removing quotes");
                mutated |= prune_quotes(doc, level);
            }

            if self.config.selectable_quotes {
                mutated |= self.make_selectable_quotes(doc);
            }

            if !self.config.keep_sender_signature {
                debug!("removing sender signature");
                if let Some(ops) = remove_old_signature(doc, &self.matcher)? {
                    cursor_ops.extend(ops);
                    mutated = true;
                }
            }

            debug!("placing cursor above own signature");
            match place_above_new_signature(doc, &self.config) {
                Some(ops) => {
                    cursor_ops.extend(ops);
                    mutated = true;
                }
                // no signature block to anchor on, open a fresh line instead
                None => cursor_ops.push(CursorCommand::InsertNewline),
            }

            debug!("cleaning up layout");
            mutated |= cleanup_layout(doc, &self.config);
        } else {
            debug!("quote fixing disabled, skipping transformation stages");
        }

        self.customize_attribution(doc, kind, &mut mutated)?;

        cursor_ops.push(CursorCommand::MoveToBeginningOfLine);

        Ok(PipelineResult {
            mutated,
            cursor_ops,
            original_html,
        })
    }

    /// Dormant branch. Rewriting per-quote-level inline styles to strip
    /// color properties (so nested quotes stay selectable and inherit text
    /// color) has never been enabled.
    /// TODO: product decision pending on whether to finish the per-level
    /// style rewrite or retire the preference; a no-op until then.
    fn make_selectable_quotes(&self, _doc: &Document) -> bool {
        false
    }

    fn customize_attribution(
        &self,
        doc: &Document,
        kind: MessageKind,
        mutated: &mut bool,
    ) -> EngineResult<()> {
        let attributor = match self.attributor {
            Some(attributor) => attributor,
            None => return Ok(()),
        };

        let outcome = if self.config.use_custom_reply_attribution && kind.is_reply() {
            debug!("customizing reply attribution");
            Some(attributor.customize_reply(doc))
        } else if self.config.use_custom_forward_attribution && kind.is_forward() {
            debug!("customizing forward attribution");
            Some(attributor.customize_forward(doc))
        } else {
            None
        };

        match outcome {
            Some(Ok(changed)) => *mutated |= changed,
            Some(Err(err)) => {
                if self.config.debug {
                    return Err(err.into());
                }
                // one optional feature must not abort the stages that ran
                warn!(error = %err, "attribution customization failed, keeping stock attribution");
            }
            None => {}
        }
        Ok(())
    }
}
