use tracing::debug;

use crate::{Error, Units, WeatherReport, render::ReportView};

/// City fetched once at startup, before any user interaction.
pub const DEFAULT_CITY: &str = "London";

/// One issued fetch. `seq` orders competing fetches: whichever completion
/// carries the highest sequence applied so far wins, the rest are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub city: String,
    pub units: Units,
}

/// What [`WeatherWidget::resolve`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    DiscardedStale,
}

/// State machine behind the three display regions (loading, error, report).
///
/// The methods that start a fetch (`startup`, `search`, `set_unit`) only
/// mutate state and hand back a [`FetchRequest`]; the caller performs the
/// actual I/O and feeds the outcome to [`WeatherWidget::resolve`]. Every
/// transition is synchronous, so the whole lifecycle is testable without a
/// network.
#[derive(Debug, Default)]
pub struct WeatherWidget {
    units: Units,
    /// City of the newest applied successful fetch; unit changes re-query it.
    last_searched_city: Option<String>,
    next_seq: u64,
    applied_seq: u64,
    in_flight: u32,
    view: Option<ReportView>,
    error: Option<String>,
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Implicit initial action: fetch the default city under the current
    /// (default) unit system.
    pub fn startup(&mut self) -> FetchRequest {
        self.issue(DEFAULT_CITY.to_string())
    }

    /// Submit a search. Whitespace-only input fails validation before any
    /// request is issued and puts the hint in the error region.
    pub fn search(&mut self, input: &str) -> Result<FetchRequest, Error> {
        let city = input.trim();
        if city.is_empty() {
            self.error = Some(Error::EmptyCity.to_string());
            return Err(Error::EmptyCity);
        }

        Ok(self.issue(city.to_string()))
    }

    /// Select a unit system. Re-queries the last successfully shown city, if
    /// there is one; re-selecting the already-active system re-queries too.
    pub fn set_unit(&mut self, units: Units) -> Option<FetchRequest> {
        self.units = units;
        let city = self.last_searched_city.clone()?;
        Some(self.issue(city))
    }

    fn issue(&mut self, city: String) -> FetchRequest {
        self.next_seq += 1;
        self.in_flight += 1;
        // Starting a fetch clears the error region; the previous report stays
        // up until a newer outcome replaces it.
        self.error = None;

        let request = FetchRequest { seq: self.next_seq, city, units: self.units };
        debug!(seq = request.seq, city = %request.city, units = %request.units, "issued fetch");
        request
    }

    /// Apply a completed fetch. The loading indicator is released no matter
    /// what; completions older than the newest applied one are dropped, so a
    /// slow superseded response can never overwrite a newer display.
    pub fn resolve(
        &mut self,
        request: &FetchRequest,
        outcome: Result<WeatherReport, Error>,
    ) -> Resolution {
        self.in_flight = self.in_flight.saturating_sub(1);

        if request.seq <= self.applied_seq {
            debug!(seq = request.seq, applied = self.applied_seq, "discarded stale completion");
            return Resolution::DiscardedStale;
        }
        self.applied_seq = request.seq;

        match outcome {
            Ok(report) => {
                self.last_searched_city = Some(request.city.clone());
                self.view = Some(ReportView::build(&report, request.units));
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }

        Resolution::Applied
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn last_searched_city(&self) -> Option<&str> {
        self.last_searched_city.as_deref()
    }

    /// Loading region: visible while any request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Report region: the current view, if a fetch ever succeeded.
    pub fn view(&self) -> Option<&ReportView> {
        self.view.as_ref()
    }

    /// Error region: the full line shown to the user, or `None` when hidden.
    pub fn error_line(&self) -> Option<String> {
        self.error.as_ref().map(|message| format!("Error: {message}"))
    }
}
