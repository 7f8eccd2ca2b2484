//! Page-level bootstrap tying the behaviors to one configuration

use std::collections::HashMap;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use vitrine_config::{ConfigLoader, SiteConfig, validation::validate};

use crate::{
    carousel::{CarouselDriver, CarouselHost, CarouselKey, CarouselRegistry},
    error::{Result, VitrineError},
    form::{
        ContactSubmission, Field, FormMessage, SubmitOutcome, SubmitState,
        SubmitTimings,
    },
    navigation::{
        HeaderTracker, MobileMenu, Reveal, RevealTracker, SectionBounds,
        ViewportRect, active_section, scroll_target,
    },
    search::{
        CatalogEntry, CatalogKey, CatalogSearch, SearchMessage, Visibility,
    },
};

/// Everything the page script wires up on load.
///
/// Carousels whose elements are missing are skipped with a warning; the rest
/// of the page keeps working.
#[derive(Debug)]
pub struct Site<H: CarouselHost> {
    config: SiteConfig,
    carousels: CarouselDriver<H>,
    catalogs: HashMap<CatalogKey, CatalogSearch>,
    search_sender: UnboundedSender<SearchMessage>,
    search_inbox: UnboundedReceiver<SearchMessage>,
    header: HeaderTracker,
    menu: MobileMenu,
    reveal: RevealTracker,
    contact: ContactSubmission,
    form_inbox: UnboundedReceiver<FormMessage>,
}

impl<H: CarouselHost> Site<H> {
    /// Load configuration through [`ConfigLoader`] and mount.
    pub fn from_environment(blog: H, projects: H) -> Result<Self> {
        let load = ConfigLoader::new().load()?;
        tracing::debug!("site configuration source: {:?}", load.source);
        Self::mount(load.config, blog, projects)
    }

    /// Validate `config` and mount both carousels.
    pub fn mount(config: SiteConfig, blog: H, projects: H) -> Result<Self> {
        validate(&config)?;

        let (mut registry, inbox) = CarouselRegistry::new();
        registry.mount_or_skip(CarouselKey::Blog, &config.blog, blog)?;
        registry.mount_or_skip(
            CarouselKey::Projects,
            &config.projects,
            projects,
        )?;
        tracing::info!("mounted {} carousel(s)", registry.len());

        let (search_sender, search_inbox) = mpsc::unbounded_channel();
        let (form_sender, form_inbox) = mpsc::unbounded_channel();
        Ok(Self {
            config,
            carousels: CarouselDriver::new(registry, inbox),
            catalogs: HashMap::new(),
            search_sender,
            search_inbox,
            header: HeaderTracker::new(),
            menu: MobileMenu::new(),
            reveal: RevealTracker::new(),
            contact: ContactSubmission::new(
                SubmitTimings::default(),
                form_sender,
            ),
            form_inbox,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn carousels(&self) -> &CarouselDriver<H> {
        &self.carousels
    }

    pub fn carousels_mut(&mut self) -> &mut CarouselDriver<H> {
        &mut self.carousels
    }

    pub fn header_mut(&mut self) -> &mut HeaderTracker {
        &mut self.header
    }

    pub fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    pub fn reveal_mut(&mut self) -> &mut RevealTracker {
        &mut self.reveal
    }

    /// Reveal the watched elements now visible in a viewport of
    /// `viewport_height` pixels.
    pub fn scan_reveals<F>(
        &mut self,
        viewport_height: f32,
        rect_of: F,
    ) -> Vec<Reveal>
    where
        F: FnMut(&str) -> Option<ViewportRect>,
    {
        self.reveal
            .scan(viewport_height, &self.config.navigation, rect_of)
    }

    pub fn contact_state(&self) -> SubmitState {
        self.contact.state()
    }

    /// Submit the contact form with its current field values.
    pub fn submit_contact(
        &mut self,
        fields: &[Field],
    ) -> Result<SubmitOutcome> {
        self.contact.submit(fields)
    }

    /// Wait for the next contact form timer and apply it. Returns the new
    /// state when it changed.
    pub async fn form_step(&mut self) -> Result<Option<SubmitState>> {
        let message = self
            .form_inbox
            .recv()
            .await
            .ok_or(VitrineError::ChannelClosed)?;
        self.contact.update(message)
    }

    /// Register the searchable cards of a catalog, replacing earlier ones.
    pub fn register_catalog(
        &mut self,
        key: CatalogKey,
        entries: Vec<CatalogEntry>,
    ) {
        let search = CatalogSearch::new(
            key,
            entries,
            &self.config.search,
            self.search_sender.clone(),
        );
        self.catalogs.insert(key, search);
    }

    /// Sender for search input bindings.
    pub fn search_sender(&self) -> UnboundedSender<SearchMessage> {
        self.search_sender.clone()
    }

    /// Route a search message to its catalog.
    pub fn update_search(
        &mut self,
        message: SearchMessage,
    ) -> Result<Option<Vec<Visibility>>> {
        let key = message.key();
        match self.catalogs.get_mut(&key) {
            Some(search) => search.update(message),
            None => {
                tracing::debug!("no catalog registered for {key}");
                Ok(None)
            }
        }
    }

    /// Wait for the next search message and apply it.
    pub async fn search_step(
        &mut self,
    ) -> Result<(CatalogKey, Option<Vec<Visibility>>)> {
        let message = self
            .search_inbox
            .recv()
            .await
            .ok_or(VitrineError::ChannelClosed)?;
        let key = message.key();
        Ok((key, self.update_search(message)?))
    }

    /// Scroll offset for an anchor link to `section_top`.
    pub fn anchor_target(
        &self,
        section_top: f32,
        header_height: Option<f32>,
    ) -> f32 {
        scroll_target(section_top, header_height, &self.config.navigation)
    }

    /// Section to highlight in the navigation bar.
    pub fn active_section<'a>(
        &self,
        sections: &'a [SectionBounds],
        scroll_y: f32,
        viewport_height: f32,
    ) -> Option<&'a SectionBounds> {
        active_section(
            sections,
            scroll_y,
            viewport_height,
            &self.config.navigation,
        )
    }
}
