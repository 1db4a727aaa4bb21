//! Drive a carousel through a script against the simulated page.

use std::fmt;
use std::time::{Duration, Instant};

use lightbox_config::LightboxConfig;
use lightbox_core::{Carousel, CarouselMessage, Key, PointerSample, ViewState};
use lightbox_model::Sequence;
use lightbox_review::{KeyValueStore, SelectionStore, SharedSelection};
use tracing::{debug, warn};

use crate::script::Step;
use crate::sim::{Completion, CompletionQueue, SimFactory, SimHost};

const SWIPE_Y: f32 = 300.0;
const SWIPE_STEPS: u32 = 4;

/// State after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: String,
    pub state: ViewState,
    pub index: Option<usize>,
    pub clip: Option<String>,
    pub track_offset: f32,
    pub review: String,
    pub note: Option<String>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self
            .index
            .map_or_else(|| "-".to_owned(), |i| i.to_string());
        write!(
            f,
            "{:<20} state={} index={} clip={} offset={:.0} review=\"{}\"",
            self.step,
            self.state,
            index,
            self.clip.as_deref().unwrap_or("-"),
            self.track_offset,
            self.review,
        )?;
        if let Some(note) = &self.note {
            write!(f, " ({note})")?;
        }
        Ok(())
    }
}

pub struct Replayer<K: KeyValueStore + 'static> {
    engine: Carousel<SimFactory, SimHost>,
    completions: CompletionQueue,
    sequence: Sequence,
    review: SharedSelection<K>,
    clock: Instant,
}

impl<K: KeyValueStore + 'static> fmt::Debug for Replayer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replayer")
            .field("engine", &self.engine)
            .field("clips", &self.sequence.len())
            .finish_non_exhaustive()
    }
}

impl<K: KeyValueStore + 'static> Replayer<K> {
    pub fn new(
        sequence: Sequence,
        config: &LightboxConfig,
        width: f32,
        kv: K,
    ) -> Self {
        let completions = CompletionQueue::default();
        let review = SharedSelection::new(SelectionStore::new(
            kv,
            config.review.clone(),
        ));
        let engine = Carousel::new(
            config.carousel,
            SimFactory::new(completions.clone()),
            SimHost::new(width, completions.clone()),
        )
        .with_observer(review.clone());

        Self {
            engine,
            completions,
            sequence,
            review,
            clock: Instant::now(),
        }
    }

    pub fn engine(&self) -> &Carousel<SimFactory, SimHost> {
        &self.engine
    }

    pub fn run(&mut self, steps: &[Step]) -> anyhow::Result<Vec<StepReport>> {
        steps.iter().map(|step| self.apply(step)).collect()
    }

    pub fn apply(&mut self, step: &Step) -> anyhow::Result<StepReport> {
        debug!(%step, "replay step");
        let note = match step {
            Step::Open { index } => self
                .engine
                .open(&self.sequence, *index)
                .err()
                .map(|err| format!("error: {err}")),
            Step::Close => {
                self.engine.close();
                None
            }
            Step::Next => ignored(self.engine.next()),
            Step::Prev => ignored(self.engine.prev()),
            Step::Key { key } => {
                if self.engine.handle_key(Key::from_name(key)) {
                    None
                } else {
                    Some("not consumed".to_owned())
                }
            }
            Step::Swipe { dx, ms } => {
                self.swipe(*dx, *ms);
                None
            }
            Step::Resize { width } => {
                self.engine.host_mut().set_width(*width);
                self.engine.resize(*width);
                None
            }
            Step::Toggle => {
                let marked = self.review.with(|store| store.toggle_current())?;
                Some(
                    match marked {
                        Some(true) => "marked",
                        Some(false) => "unmarked",
                        None => "no clip on screen",
                    }
                    .to_owned(),
                )
            }
        };
        self.drain();
        self.report(step, note)
    }

    fn swipe(&mut self, dx: f32, ms: u64) {
        let width = self
            .engine
            .viewport_width()
            .unwrap_or_else(|| self.engine.host().width());
        let start_x = if dx < 0.0 { width * 0.8 } else { width * 0.2 };
        let start = self.clock;
        let at = |elapsed: u64| start + Duration::from_millis(elapsed);

        self.engine
            .pointer_down(PointerSample::new(start_x, SWIPE_Y, at(0)));
        for step in 1..=SWIPE_STEPS {
            let fraction = step as f32 / SWIPE_STEPS as f32;
            let elapsed = ms * u64::from(step) / u64::from(SWIPE_STEPS);
            self.engine.pointer_move(PointerSample::new(
                start_x + dx * fraction,
                SWIPE_Y,
                at(elapsed),
            ));
        }
        self.engine
            .pointer_up(PointerSample::new(start_x + dx, SWIPE_Y, at(ms)));
        self.clock = at(ms + 1_000);
    }

    /// Feed every queued completion back into the engine. Completions can
    /// queue further completions (a finished page turn primes new buffers).
    fn drain(&mut self) {
        loop {
            let next = self.completions.borrow_mut().pop_front();
            let Some(completion) = next else {
                break;
            };
            let message = match completion {
                Completion::Play(ticket) => CarouselMessage::PlaySettled {
                    ticket,
                    outcome: Ok(()),
                },
                Completion::Transition(ticket) => {
                    CarouselMessage::TransitionEnded(ticket)
                }
            };
            if let Err(err) = self.engine.update(message) {
                warn!(error = %err, "simulated completion rejected");
            }
        }
    }

    fn report(
        &self,
        step: &Step,
        note: Option<String>,
    ) -> anyhow::Result<StepReport> {
        let review = self.review.with(|store| store.summary())?;
        Ok(StepReport {
            step: step.to_string(),
            state: self.engine.state(),
            index: self.engine.current_index(),
            clip: self
                .engine
                .current_clip()
                .map(|clip| clip.id().to_string()),
            track_offset: self.engine.host().track_offset(),
            review,
            note,
        })
    }

    pub fn into_review(self) -> SharedSelection<K> {
        self.review
    }
}

fn ignored(accepted: bool) -> Option<String> {
    (!accepted).then(|| "ignored".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_model::Clip;
    use lightbox_review::{MemoryStore, ReviewList};

    fn sequence(ids: &[&str]) -> Sequence {
        ids.iter()
            .map(|id| {
                Clip::parse(id, &format!("https://cdn.example/{id}.mp4"), None)
                    .unwrap()
            })
            .collect()
    }

    fn replayer(ids: &[&str]) -> Replayer<MemoryStore> {
        Replayer::new(
            sequence(ids),
            &LightboxConfig::default(),
            400.0,
            MemoryStore::new(),
        )
    }

    #[test]
    fn walks_the_sequence() {
        let mut replay = replayer(&["a", "b", "c"]);
        let reports = replay
            .run(&[
                Step::Open { index: 0 },
                Step::Next,
                Step::Swipe { dx: -250.0, ms: 300 },
                Step::Next,
                Step::Key {
                    key: "ArrowLeft".into(),
                },
            ])
            .unwrap();

        let indices: Vec<_> = reports.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![Some(0), Some(1), Some(2), Some(2), Some(1)]);
        assert_eq!(reports[3].note.as_deref(), Some("ignored"));
        assert!(reports.iter().all(|r| r.state == ViewState::Idle));
        assert_eq!(reports[4].track_offset, -400.0);
    }

    #[test]
    fn neighbors_are_primed_after_each_step() {
        let mut replay = replayer(&["a", "b", "c"]);
        replay.apply(&Step::Open { index: 1 }).unwrap();
        let ring = replay.engine().ring().unwrap();
        for (role, buffer) in ring.iter() {
            assert_ne!(
                buffer.phase(),
                lightbox_core::BufferPhase::Priming,
                "{role} still priming"
            );
        }
    }

    #[test]
    fn toggle_marks_the_clip_on_screen() {
        let mut replay = replayer(&["a", "b"]);
        let reports = replay
            .run(&[
                Step::Toggle,
                Step::Open { index: 1 },
                Step::Toggle,
                Step::Close,
            ])
            .unwrap();
        assert_eq!(reports[0].note.as_deref(), Some("no clip on screen"));
        assert_eq!(reports[2].note.as_deref(), Some("marked"));
        assert_eq!(reports[3].review, "1 to add");
        assert_eq!(reports[3].state, ViewState::Closed);

        let review = replay.into_review();
        let adds = review.with(|s| s.list(ReviewList::Add)).unwrap();
        assert_eq!(adds.len(), 1);
        assert_eq!(adds[0].as_str(), "b");
    }

    #[test]
    fn open_errors_are_reported_inline() {
        let mut replay = replayer(&["a"]);
        let report = replay.apply(&Step::Open { index: 5 }).unwrap();
        assert_eq!(report.state, ViewState::Closed);
        assert!(report.note.unwrap().contains("out of range"));
    }

    #[test]
    fn report_line_is_stable() {
        let mut replay = replayer(&["a", "b"]);
        let report = replay.apply(&Step::Open { index: 0 }).unwrap();
        assert_eq!(
            report.to_string(),
            "open 0               state=idle index=0 clip=a offset=-400 review=\"no changes\""
        );
    }
}
