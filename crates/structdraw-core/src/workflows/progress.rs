/// Events emitted by the workflows while they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// A countable task inside the current phase, e.g. one step per chain.
    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback; without one, events are dropped.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Applies `step` to every item as one counted task, reporting an increment after each.
    pub fn task<T, R, E>(
        &self,
        items: impl ExactSizeIterator<Item = T>,
        mut step: impl FnMut(T) -> Result<R, E>,
    ) -> Result<Vec<R>, E> {
        self.report(Progress::TaskStart {
            total_steps: items.len() as u64,
        });
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            results.push(step(item)?);
            self.report(Progress::TaskIncrement);
        }
        self.report(Progress::TaskFinish);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording(seen: &Mutex<Vec<Progress>>) -> ProgressReporter<'_> {
        ProgressReporter::with_callback(Box::new(move |event| {
            seen.lock().unwrap().push(event);
        }))
    }

    #[test]
    fn silent_reporter_ignores_events() {
        ProgressReporter::new().report(Progress::TaskIncrement);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = recording(&seen);
        reporter.report(Progress::PhaseStart { name: "Layout" });
        reporter.report(Progress::Message("3 chains".to_string()));
        reporter.report(Progress::PhaseFinish);
        drop(reporter);

        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                Progress::PhaseStart { name: "Layout" },
                Progress::Message("3 chains".to_string()),
                Progress::PhaseFinish,
            ]
        );
    }

    #[test]
    fn task_reports_one_increment_per_item() {
        let seen = Mutex::new(Vec::new());
        let reporter = recording(&seen);
        let doubled: Result<Vec<i32>, ()> = reporter.task([1, 2].into_iter(), |x| Ok(x * 2));
        drop(reporter);

        assert_eq!(doubled, Ok(vec![2, 4]));
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                Progress::TaskStart { total_steps: 2 },
                Progress::TaskIncrement,
                Progress::TaskIncrement,
                Progress::TaskFinish,
            ]
        );
    }

    #[test]
    fn task_stops_at_first_error() {
        let reporter = ProgressReporter::new();
        let result: Result<Vec<i32>, &str> =
            reporter.task([1, 2, 3].into_iter(), |x| if x == 2 { Err("boom") } else { Ok(x) });
        assert_eq!(result, Err("boom"));
    }
}
