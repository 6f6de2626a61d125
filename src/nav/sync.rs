use crate::config::LOOKAHEAD_OFFSET_PX;

/// A named vertical region of the page, measured in document pixels.
/// Extents come from the host layout and are re-measured on every use,
/// never cached across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment over `[top, top + height)`.
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Snapshot of the vertical scroll offset plus the fixed header height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProbe {
    pub offset: f64,
    pub header_height: f64,
}

impl ScrollProbe {
    /// The document-space point used to decide which section is current.
    pub fn point(&self) -> f64 {
        self.offset + self.header_height + LOOKAHEAD_OFFSET_PX
    }
}

/// Linear scan in document order; the first section containing the probe
/// point wins, so overlapping extents resolve to the earlier section.
/// `None` when the probe falls in a gap, above the first section, or past
/// the last one.
pub fn compute_active_section<'a>(probe: ScrollProbe, sections: &'a [Section]) -> Option<&'a str> {
    let point = probe.point();
    sections
        .iter()
        .find(|section| section.contains(point))
        .map(|section| section.id.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub id: String,
    pub active: bool,
}

/// The ordered set of nav links. At most one link is active at a time.
#[derive(Debug, Default)]
pub struct NavState {
    links: Vec<NavLink>,
}

impl NavState {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: ids
                .into_iter()
                .map(|id| NavLink { id: id.into(), active: false })
                .collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.links.iter().any(|link| link.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.id.as_str())
    }

    /// Marks `id` as the sole active link (or clears all on `None`).
    /// Returns whether anything changed; reapplying the current id is a
    /// no-op.
    pub fn apply_active_link(&mut self, id: Option<&str>) -> bool {
        if self.active_id() == id {
            return false;
        }
        for link in &mut self.links {
            link.active = Some(link.id.as_str()) == id;
        }
        true
    }

    /// The hash fragment (`#id`) the URL should settle on, if any link is
    /// active.
    pub fn desired_hash(&self) -> Option<String> {
        self.active_id().map(|id| format!("#{id}"))
    }

    #[cfg(test)]
    fn links(&self) -> &[NavLink] {
        &self.links
    }
}

/// Collapses a burst of scroll events into the single most recent probe.
/// The debounce timer decides *when* to recompute; this decides *with what*.
#[derive(Debug, Default)]
pub struct ScrollCoalescer {
    latest: Option<ScrollProbe>,
}

impl ScrollCoalescer {
    pub fn note(&mut self, probe: ScrollProbe) {
        self.latest = Some(probe);
    }

    /// The probe from the last `note` since the previous `take`, if any.
    pub fn take(&mut self) -> Option<ScrollProbe> {
        self.latest.take()
    }
}

/// Distinguishes hash changes this controller wrote from external ones
/// (back/forward, address-bar edits). A `hashchange` whose value matches
/// the last recorded write is our own replace echoing back and must not
/// trigger a re-scroll, or scroll-driven hash updates would feed into the
/// navigation handler and jitter.
#[derive(Debug, Default)]
pub struct HashEcho {
    last_written: Option<String>,
}

impl HashEcho {
    pub fn record_write(&mut self, hash: &str) {
        self.last_written = Some(hash.to_string());
    }

    /// True when `hash` matches the last write. Every call consumes the
    /// record: a non-matching hash is proof the user navigated somewhere
    /// else, so the record is stale and a later change back to the written
    /// value must count as navigation, not as an echo.
    pub fn is_echo(&mut self, hash: &str) -> bool {
        self.last_written.take().as_deref() == Some(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 600.0),
            Section::new("services", 600.0, 800.0),
            Section::new("about", 1400.0, 500.0),
            Section::new("contact", 2000.0, 700.0),
        ]
    }

    fn probe(offset: f64) -> ScrollProbe {
        ScrollProbe { offset, header_height: 80.0 }
    }

    #[test]
    fn probe_inside_extent_selects_that_section() {
        let sections = page();
        // offset 500 + header 80 + lookahead 100 = 680, inside services.
        assert_eq!(compute_active_section(probe(500.0), &sections), Some("services"));
        assert_eq!(compute_active_section(probe(0.0), &sections), Some("home"));
        assert_eq!(compute_active_section(probe(1900.0), &sections), Some("contact"));
    }

    #[test]
    fn probe_outside_every_extent_selects_none() {
        let sections = page();
        // Past the last section's bottom (2700).
        assert_eq!(compute_active_section(probe(2600.0), &sections), None);
        // In the gap between about (ends 1900) and contact (starts 2000).
        assert_eq!(compute_active_section(probe(1770.0), &sections), None);
    }

    #[test]
    fn probe_above_first_section_selects_none() {
        let sections = vec![Section::new("home", 300.0, 600.0)];
        assert_eq!(compute_active_section(probe(0.0), &sections), None);
    }

    #[test]
    fn overlapping_extents_resolve_to_document_order() {
        let sections = vec![
            Section::new("first", 0.0, 1000.0),
            Section::new("second", 500.0, 1000.0),
        ];
        // 520 + 180 = 700, inside both.
        assert_eq!(compute_active_section(probe(520.0), &sections), Some("first"));
    }

    #[test]
    fn section_bottom_is_exclusive() {
        let sections = page();
        // Probe point exactly 600: home is [0, 600), services is [600, 1400).
        let p = ScrollProbe { offset: 500.0, header_height: 0.0 };
        assert_eq!(p.point(), 600.0);
        assert_eq!(compute_active_section(p, &sections), Some("services"));
    }

    #[test]
    fn apply_active_link_keeps_single_active() {
        let mut nav = NavState::new(["home", "services", "about", "contact"]);
        assert!(nav.apply_active_link(Some("services")));
        assert_eq!(nav.active_id(), Some("services"));
        assert_eq!(nav.links().iter().filter(|l| l.active).count(), 1);

        assert!(nav.apply_active_link(Some("about")));
        assert_eq!(nav.active_id(), Some("about"));
        assert_eq!(nav.links().iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn apply_active_link_none_clears_all() {
        let mut nav = NavState::new(["home", "services"]);
        nav.apply_active_link(Some("home"));
        assert!(nav.apply_active_link(None));
        assert!(nav.links().iter().all(|l| !l.active));
        assert_eq!(nav.desired_hash(), None);
    }

    #[test]
    fn apply_active_link_is_idempotent() {
        let mut nav = NavState::new(["home", "services"]);
        assert!(nav.apply_active_link(Some("home")));
        let snapshot = nav.links().to_vec();
        assert!(!nav.apply_active_link(Some("home")));
        assert_eq!(nav.links(), snapshot.as_slice());
    }

    #[test]
    fn unknown_anchor_is_a_no_op() {
        let mut nav = NavState::new(["home", "services"]);
        nav.apply_active_link(Some("home"));
        // The controller gates clicks on membership, so an unknown anchor
        // never reaches apply_active_link and the state is untouched.
        let clicked = "nonexistent";
        if nav.contains(clicked) {
            nav.apply_active_link(Some(clicked));
        }
        assert_eq!(nav.active_id(), Some("home"));
    }

    #[test]
    fn coalescer_keeps_only_the_last_probe_of_a_burst() {
        let mut burst = ScrollCoalescer::default();
        for i in 0..50 {
            burst.note(probe(i as f64 * 10.0));
        }
        assert_eq!(burst.take(), Some(probe(490.0)));
        // The burst was consumed; a timer firing again recomputes nothing.
        assert_eq!(burst.take(), None);
    }

    #[test]
    fn click_then_settle_converges_on_clicked_link_and_hash() {
        let sections = page();
        let mut nav = NavState::new(["home", "services", "about", "contact"]);

        // Click: immediately the source of truth.
        assert!(nav.apply_active_link(Some("services")));

        // Scroll settles where the smooth scroll targeted: services.top -
        // header_height, so the probe lands inside services and the
        // debounced recompute confirms the click.
        let settled = ScrollProbe { offset: 520.0, header_height: 80.0 };
        let confirmed = compute_active_section(settled, &sections);
        assert_eq!(confirmed, Some("services"));
        assert!(!nav.apply_active_link(confirmed));

        // After the long quiet window the URL catches up.
        assert_eq!(nav.desired_hash(), Some("#services".into()));
    }

    #[test]
    fn hash_echo_absorbs_own_write_once() {
        let mut echo = HashEcho::default();
        echo.record_write("#services");
        assert!(echo.is_echo("#services"));
        // A later identical hash change is external (e.g. back/forward).
        assert!(!echo.is_echo("#services"));
        assert!(!echo.is_echo("#contact"));
    }

    #[test]
    fn non_matching_hash_change_invalidates_the_record() {
        let mut echo = HashEcho::default();
        echo.record_write("#services");
        // The user navigated elsewhere before any echo arrived; the record
        // is stale from here on.
        assert!(!echo.is_echo("#home"));
        // Returning to the recorded hash is genuine navigation and must
        // scroll, not be swallowed as an echo.
        assert!(!echo.is_echo("#services"));
    }

    #[test]
    fn hash_initiated_load_activates_matching_link() {
        let mut nav = NavState::new(["home", "services", "about", "contact"]);

        // Loading with #contact in the URL: the id survives the fragment
        // parse, is a known section, and becomes the sole active link
        // without any click.
        let id = "#contact".strip_prefix('#').filter(|id| !id.is_empty());
        assert_eq!(id, Some("contact"));
        let id = id.unwrap();
        assert!(nav.contains(id));
        assert!(nav.apply_active_link(Some(id)));
        assert_eq!(nav.active_id(), Some("contact"));
        assert_eq!(nav.links().iter().filter(|l| l.active).count(), 1);
        assert_eq!(nav.desired_hash(), Some("#contact".into()));

        // A bare "#" never parses to an id, and an unknown id fails the
        // membership gate; neither touches the state.
        assert_eq!("#".strip_prefix('#').filter(|id| !id.is_empty()), None);
        let unknown = "#nonexistent".strip_prefix('#').filter(|id| !id.is_empty());
        assert_eq!(unknown, Some("nonexistent"));
        assert!(!nav.contains(unknown.unwrap()));
        assert_eq!(nav.active_id(), Some("contact"));
    }
}
