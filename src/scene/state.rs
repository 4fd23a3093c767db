use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::Result;
use crate::sequencer::SequencerSettings;

use super::{Action, Animation, ObjectId, Renderer, SceneObject, Text, LEFT, UP};

/// Presentation state shared by all stages of a run.
///
/// Texts follow a replace-or-append discipline: showing texts either fades
/// out every current text first, or adds to them. The axes and everything
/// drawn on them form one group that fades in and out together.
pub struct Scene<'r> {
    renderer: &'r mut dyn Renderer,
    settings: SequencerSettings,
    legend_interval: f64,
    next_id: u64,
    current_texts: Vec<ObjectId>,
    axes: Option<ObjectId>,
    axes_group: Vec<ObjectId>,
    axes_shown: bool,
    episode: u32,
    kept: HashMap<String, Vec<ObjectId>>,
}

impl<'r> Scene<'r> {
    #[must_use]
    pub fn new(renderer: &'r mut dyn Renderer, settings: SequencerSettings) -> Self {
        let legend_interval = settings.legend_interval;
        Self {
            renderer,
            settings,
            legend_interval,
            next_id: 0,
            current_texts: Vec::new(),
            axes: None,
            axes_group: Vec::new(),
            axes_shown: false,
            episode: 0,
            kept: HashMap::new(),
        }
    }

    /// Overrides the reading time taken from the settings.
    #[must_use]
    pub fn with_legend_interval(mut self, seconds: f64) -> Self {
        self.legend_interval = seconds;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &SequencerSettings {
        &self.settings
    }

    #[must_use]
    pub fn legend_interval(&self) -> f64 {
        self.legend_interval
    }

    /// Declares an object to the renderer. TeX texts without a template get
    /// the default one.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer rejects the object.
    pub fn spawn(&mut self, object: impl Into<SceneObject>) -> Result<ObjectId> {
        let mut object = object.into();
        if let SceneObject::Text(text) = &mut object {
            if text.is_latex() && text.template.is_none() {
                text.template = Some(self.settings.tex.clone());
            }
        }
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.renderer.play(Action::Spawn { id, object })?;
        Ok(id)
    }

    /// Spawns several texts, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer rejects one of them.
    pub fn spawn_texts(&mut self, texts: Vec<Text>) -> Result<Vec<ObjectId>> {
        texts.into_iter().map(|t| self.spawn(t)).collect()
    }

    /// Plays animations together. Nothing happens for an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn play(&mut self, animations: Vec<Animation>) -> Result<()> {
        if animations.is_empty() {
            return Ok(());
        }
        self.renderer.play(Action::Play { animations })
    }

    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn fade_in(&mut self, ids: &[ObjectId]) -> Result<()> {
        self.play(ids.iter().map(|&id| Animation::FadeIn { id }).collect())
    }

    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn fade_out(&mut self, ids: &[ObjectId]) -> Result<()> {
        self.play(ids.iter().map(|&id| Animation::FadeOut { id }).collect())
    }

    /// Shows objects without animation.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn add(&mut self, ids: &[ObjectId]) -> Result<()> {
        self.renderer.play(Action::Add { ids: ids.to_vec() })
    }

    /// Hides objects without animation.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn remove(&mut self, ids: &[ObjectId]) -> Result<()> {
        self.renderer.play(Action::Remove { ids: ids.to_vec() })
    }

    /// Waits `factor` reading intervals.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn wait(&mut self, factor: f64) -> Result<()> {
        let seconds = self.legend_interval * factor;
        self.renderer.play(Action::Wait { seconds })
    }

    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn section(&mut self, name: &str) -> Result<()> {
        info!(section = name, "new section");
        self.renderer.play(Action::Section {
            name: name.to_owned(),
        })
    }

    /// Fades out every current text.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn clear_texts(&mut self) -> Result<()> {
        let texts = std::mem::take(&mut self.current_texts);
        self.fade_out(&texts)
    }

    /// Fades in texts, either replacing the current ones or joining them.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn show_texts(&mut self, ids: &[ObjectId], replace: bool) -> Result<()> {
        if replace {
            self.clear_texts()?;
        }
        self.current_texts.extend_from_slice(ids);
        self.fade_in(ids)
    }

    /// Drops the current texts from the bookkeeping when they were faded out
    /// by other means.
    pub fn forget_texts(&mut self) {
        self.current_texts.clear();
    }

    #[must_use]
    pub fn current_texts(&self) -> &[ObjectId] {
        &self.current_texts
    }

    /// Declares the axes, fades them in, and moves them to the left half.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn place_axes(&mut self, axes: SceneObject) -> Result<ObjectId> {
        let id = self.spawn(axes)?;
        self.fade_in(&[id])?;
        self.axes = Some(id);
        self.axes_shown = true;
        self.axes_group.push(id);
        self.play(vec![Animation::Shift { id, by: LEFT * 3.0 }])?;
        Ok(id)
    }

    #[must_use]
    pub fn axes(&self) -> Option<ObjectId> {
        self.axes
    }

    #[must_use]
    pub fn axes_shown(&self) -> bool {
        self.axes_shown
    }

    #[must_use]
    pub fn axes_group(&self) -> &[ObjectId] {
        &self.axes_group
    }

    /// Attaches an object to the axes so it shows and hides with them.
    pub fn add_to_axes_group(&mut self, id: ObjectId) {
        self.axes_group.push(id);
    }

    /// Animations hiding the axes group, empty when already hidden.
    pub fn hide_axes_animations(&mut self) -> Vec<Animation> {
        if !self.axes_shown {
            return Vec::new();
        }
        debug!("hiding axes");
        self.axes_shown = false;
        self.axes_group
            .iter()
            .map(|&id| Animation::FadeOut { id })
            .collect()
    }

    /// Animations showing the axes group, empty when already shown.
    pub fn show_axes_animations(&mut self) -> Vec<Animation> {
        if self.axes_shown {
            return Vec::new();
        }
        debug!("showing axes");
        self.axes_shown = true;
        self.axes_group
            .iter()
            .map(|&id| Animation::FadeIn { id })
            .collect()
    }

    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn hide_axes(&mut self) -> Result<()> {
        let animations = self.hide_axes_animations();
        self.play(animations)
    }

    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn show_axes(&mut self) -> Result<()> {
        let animations = self.show_axes_animations();
        self.play(animations)
    }

    /// Stores objects under a name so a later stage can reuse them.
    pub fn keep(&mut self, name: &str, ids: Vec<ObjectId>) {
        self.kept.insert(name.to_owned(), ids);
    }

    /// Objects stored with [`Scene::keep`], empty when nothing was stored.
    #[must_use]
    pub fn kept(&self, name: &str) -> Vec<ObjectId> {
        self.kept.get(name).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn set_episode(&mut self, episode: u32) {
        self.episode = episode;
    }

    /// Announces a part of the video full screen, with its number and title.
    ///
    /// Clears the texts and hides the axes first. With `axes_at_end`, the
    /// axes come back as the title fades out. When episodes are disabled in
    /// the settings only the clearing and the axes handling remain.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn announce_episode(&mut self, title: &str, axes_at_end: bool) -> Result<()> {
        let number = self.episode;
        info!(episode = number, title, "announcing episode");
        self.clear_texts()?;
        self.hide_axes()?;

        if self.settings.episodes {
            let num = self.spawn(Text::tex(format!("Épisode {number}")).at(UP))?;
            let heading = self.spawn(Text::tex(title).below(num))?;
            self.fade_in(&[num, heading])?;
            self.wait(1.0)?;
            let mut animations = vec![
                Animation::FadeOut { id: num },
                Animation::FadeOut { id: heading },
            ];
            if axes_at_end {
                animations.extend(self.show_axes_animations());
            }
            self.play(animations)?;
        } else if axes_at_end {
            self.show_axes()?;
        }

        self.episode += 1;
        Ok(())
    }
}
