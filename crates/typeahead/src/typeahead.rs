//! The typeahead widget: a single-line text input with an inline completion
//! hint and a dropdown of selectable options.
//!
//! The widget owns a small state record (the input value, hint and dropdown
//! visibility, and the selected option index) and mutates it exclusively
//! through its event handlers. All handlers run to completion synchronously;
//! connected slots fire before the handler returns.
//!
//! # Example
//!
//! ```
//! use typeahead::{Typeahead, StringListModel, PrefixHint, TextChangeEvent};
//!
//! let mut widget = Typeahead::new()
//!     .with_hint_provider(PrefixHint::new(vec!["ezequiel".to_string()]))
//!     .with_options(StringListModel::from(vec!["a", "b", "c"]));
//!
//! widget.completed.connect(|full| {
//!     println!("Accepted hint: {}", full);
//! });
//!
//! widget.handle_text_change(&TextChangeEvent::new("eze"));
//! assert!(widget.is_hint_visible());
//! assert!(widget.is_dropdown_visible());
//! ```
//!
//! # Signals
//!
//! - `text_changed(String)`: Emitted when the input value changes
//! - `focus_gained(())`: Emitted when the input gains focus
//! - `completed(String)`: Emitted with the full hint string when the user
//!   accepts the hint (Tab, End, or a forward arrow at the end of the text)
//! - `option_highlighted(String)`: Emitted when arrow navigation moves the
//!   highlighted option; carries the option's display value, or the raw
//!   input value when the highlight returns to none
//! - `option_activated((usize, String))`: Emitted when an option is chosen
//!   by mouse press

use unicode_segmentation::UnicodeSegmentation;

use typeahead_core::{Object, ObjectId, SharedObjectRegistry, Signal};

use crate::direction::TextDirection;
use crate::events::{
    FocusInEvent, Key, KeyPressEvent, PressEvent, TextChangeEvent, WindowPressEvent,
};
use crate::hint::completable_hint;
use crate::model::{HintProvider, OptionListModel, StringListModel};

/// Direction of dropdown navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Move the highlight toward the previous option.
    Up,
    /// Move the highlight toward the next option.
    Down,
}

impl NavDirection {
    /// The index delta for this direction.
    fn step(self) -> i32 {
        match self {
            NavDirection::Up => -1,
            NavDirection::Down => 1,
        }
    }
}

// Registry marker types for the widget's rendered subparts.
struct InputPart;
struct HintPart;
struct OptionListPart;

/// A text input with an inline completion hint and an option dropdown.
///
/// The selected index ranges over `[-1, option_count - 1]`; `-1` means no
/// option is highlighted and the raw typed text is the active value.
///
/// The widget registers itself and its subparts (input, hint overlay,
/// option list) in an object registry so that window-level presses can be
/// classified as inside or outside of its rendered subtree.
pub struct Typeahead {
    registry: SharedObjectRegistry,
    id: ObjectId,
    input_id: ObjectId,
    hint_id: ObjectId,
    list_id: ObjectId,

    /// Current text content of the input.
    value: String,

    /// Placeholder text displayed when empty (render passthrough).
    placeholder: String,

    /// Current cursor position (byte offset in value).
    cursor_pos: usize,

    /// Selection anchor (byte offset). If Some, selection extends from
    /// anchor to cursor.
    selection_anchor: Option<usize>,

    /// Whether the input currently has keyboard focus.
    has_focus: bool,

    /// Whether the inline hint should currently be shown.
    hint_visible: bool,

    /// Whether the option dropdown should currently be shown.
    dropdown_visible: bool,

    /// Currently selected option index (-1 means no selection).
    selected_index: i32,

    /// The validated full hint for the current value, if any.
    full_hint: Option<String>,

    /// Base text direction; `Auto` resolves from the current value.
    direction: TextDirection,

    /// The completion source, if configured.
    hint_provider: Option<Box<dyn HintProvider>>,

    /// The dropdown's option source.
    options: Box<dyn OptionListModel>,

    // Signals
    /// Signal emitted when the input value changes.
    pub text_changed: Signal<String>,

    /// Signal emitted when the input gains focus.
    pub focus_gained: Signal<()>,

    /// Signal emitted with the full hint string when the hint is accepted.
    pub completed: Signal<String>,

    /// Signal emitted when the highlighted option changes.
    pub option_highlighted: Signal<String>,

    /// Signal emitted when an option is chosen; carries `(index, display)`.
    pub option_activated: Signal<(usize, String)>,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new()
    }
}

impl Typeahead {
    /// Create a new typeahead with its own private object registry.
    pub fn new() -> Self {
        Self::with_registry(SharedObjectRegistry::new())
    }

    /// Create a new typeahead registered in the given registry.
    ///
    /// Hosts that route window-level presses by `ObjectId` must put every
    /// widget in the same registry so containment checks line up.
    pub fn with_registry(registry: SharedObjectRegistry) -> Self {
        let id = registry.register::<Self>();
        let input_id = registry.register::<InputPart>();
        let hint_id = registry.register::<HintPart>();
        let list_id = registry.register::<OptionListPart>();

        // Fresh ids from the same registry; parenting cannot fail.
        registry
            .set_parent(input_id, Some(id))
            .expect("fresh object id");
        registry
            .set_parent(hint_id, Some(id))
            .expect("fresh object id");
        registry
            .set_parent(list_id, Some(id))
            .expect("fresh object id");
        registry
            .set_object_name(input_id, "input".to_string())
            .expect("fresh object id");
        registry
            .set_object_name(hint_id, "hint".to_string())
            .expect("fresh object id");
        registry
            .set_object_name(list_id, "options".to_string())
            .expect("fresh object id");

        Self {
            registry,
            id,
            input_id,
            hint_id,
            list_id,
            value: String::new(),
            placeholder: String::new(),
            cursor_pos: 0,
            selection_anchor: None,
            has_focus: false,
            hint_visible: false,
            dropdown_visible: false,
            selected_index: -1,
            full_hint: None,
            direction: TextDirection::Auto,
            hint_provider: None,
            options: Box::new(StringListModel::empty()),
            text_changed: Signal::new(),
            focus_gained: Signal::new(),
            completed: Signal::new(),
            option_highlighted: Signal::new(),
            option_activated: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the initial value, builder style.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.apply_value(value.into());
        self.refresh_hint();
        self
    }

    /// Set the placeholder text, builder style.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the hint provider, builder style.
    pub fn with_hint_provider(mut self, provider: impl HintProvider + 'static) -> Self {
        self.hint_provider = Some(Box::new(provider));
        self.refresh_hint();
        self
    }

    /// Set the option model, builder style.
    pub fn with_options(mut self, options: impl OptionListModel + 'static) -> Self {
        self.options = Box::new(options);
        self
    }

    /// Set an explicit base text direction, builder style.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Get the base text direction setting.
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Set the base text direction. `Auto` (the default) resolves from the
    /// current value's first strong-directional character.
    pub fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    /// Replace the hint provider and recompute hint visibility.
    pub fn set_hint_provider(&mut self, provider: Option<Box<dyn HintProvider>>) {
        self.hint_provider = provider;
        self.refresh_hint();
    }

    /// Replace the option model.
    ///
    /// The selection is reset because indices into the old model are
    /// meaningless against the new one.
    pub fn set_options(&mut self, options: Box<dyn OptionListModel>) {
        self.options = options;
        self.selected_index = -1;
    }

    /// Get the option model.
    pub fn options(&self) -> &dyn OptionListModel {
        self.options.as_ref()
    }

    // =========================================================================
    // Value and Hint Access
    // =========================================================================

    /// Get the current input value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the input value.
    ///
    /// Moves the cursor to the end, clears any selection, and recomputes
    /// hint visibility. This is the externally driven update path: hosts
    /// that control the value call this whenever it changes, and the hint
    /// reacts just as it does for direct input events.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        let changed = self.value != value;
        self.apply_value(value);
        self.refresh_hint();
        if changed {
            self.text_changed.emit(self.value.clone());
        }
    }

    /// Check whether the inline hint should currently be shown.
    pub fn is_hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Check whether the dropdown should currently be shown.
    pub fn is_dropdown_visible(&self) -> bool {
        self.dropdown_visible
    }

    /// Get the currently selected option index (-1 means no selection).
    pub fn selected_index(&self) -> i32 {
        self.selected_index
    }

    /// Get the full hint string, if the hint is currently visible.
    pub fn hint_text(&self) -> Option<&str> {
        if self.hint_visible {
            self.full_hint.as_deref()
        } else {
            None
        }
    }

    /// Get the uncompleted remainder of the hint, if visible.
    ///
    /// This is the substring the renderer draws after the typed text.
    pub fn hint_remainder(&self) -> Option<&str> {
        self.hint_text().map(|full| &full[self.value.len()..])
    }

    /// Check whether the input currently has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Give the input keyboard focus programmatically.
    pub fn focus(&mut self) {
        self.has_focus = true;
    }

    /// Remove keyboard focus programmatically.
    pub fn blur(&mut self) {
        self.has_focus = false;
    }

    // =========================================================================
    // Cursor and Selection
    // =========================================================================

    /// Get the cursor position (byte offset).
    pub fn cursor_position(&self) -> usize {
        self.cursor_pos
    }

    /// Set the cursor position.
    ///
    /// The position is clamped to the value's length, snapped to a grapheme
    /// boundary, and any selection is cleared.
    pub fn set_cursor_position(&mut self, pos: usize) {
        let pos = self.snap_to_grapheme_boundary(pos.min(self.value.len()));
        self.cursor_pos = pos;
        self.selection_anchor = None;
    }

    /// Check if there is a selection.
    pub fn has_selection(&self) -> bool {
        self.selection_anchor.is_some() && self.selection_anchor != Some(self.cursor_pos)
    }

    /// Get the selection range (start, end) in byte offsets.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection_anchor.map(|anchor| {
            let start = anchor.min(self.cursor_pos);
            let end = anchor.max(self.cursor_pos);
            (start, end)
        })
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        if !self.value.is_empty() {
            self.selection_anchor = Some(0);
            self.cursor_pos = self.value.len();
        }
    }

    /// Clear selection without changing the cursor.
    pub fn deselect(&mut self) {
        self.selection_anchor = None;
    }

    /// Check whether the caret sits at the end of the value with no active
    /// selection span.
    ///
    /// This is the caret precondition for arrow-key hint acceptance: a
    /// forward arrow only completes when there is nothing left to move
    /// across.
    pub fn caret_at_end(&self) -> bool {
        self.cursor_pos == self.value.len()
            && self
                .selection_anchor
                .is_none_or(|anchor| anchor == self.cursor_pos)
    }

    /// Snap a byte offset to the nearest grapheme boundary at or before it.
    fn snap_to_grapheme_boundary(&self, pos: usize) -> usize {
        if pos >= self.value.len() {
            return self.value.len();
        }
        let mut boundary = 0;
        for (idx, _) in self.value.grapheme_indices(true) {
            if idx <= pos {
                boundary = idx;
            } else {
                break;
            }
        }
        boundary
    }

    fn apply_value(&mut self, value: String) {
        self.value = value;
        self.cursor_pos = self.value.len();
        self.selection_anchor = None;
    }

    // =========================================================================
    // Hint and Dropdown Visibility
    // =========================================================================

    /// Recompute the hint for the current value and show it if completable.
    pub fn show_hint(&mut self) {
        self.refresh_hint();
    }

    /// Hide the inline hint.
    pub fn hide_hint(&mut self) {
        self.hint_visible = false;
    }

    /// Show the option dropdown.
    pub fn show_dropdown(&mut self) {
        self.dropdown_visible = true;
    }

    /// Hide the option dropdown.
    pub fn hide_dropdown(&mut self) {
        self.dropdown_visible = false;
    }

    /// Recompute `full_hint` and hint visibility from the current value and
    /// provider.
    fn refresh_hint(&mut self) {
        self.full_hint = match &self.hint_provider {
            Some(provider) => completable_hint(&self.value, provider.as_ref()),
            None => None,
        };
        self.hint_visible = self.full_hint.is_some();
        tracing::trace!(
            target: "typeahead::widget",
            hint_visible = self.hint_visible,
            "recomputed hint"
        );
    }

    /// The visible hint, cloned for emission.
    fn visible_hint(&self) -> Option<String> {
        if self.hint_visible {
            self.full_hint.clone()
        } else {
            None
        }
    }

    // =========================================================================
    // Selection Navigation
    // =========================================================================

    /// Move the highlighted option one step up or down, wrapping through
    /// the no-selection state.
    ///
    /// Stepping above the last option wraps to no selection (-1); stepping
    /// below no selection wraps to the last option. Does nothing when the
    /// option model is empty. Emits `option_highlighted` with the display
    /// value of the new highlight, or the raw input value when the
    /// highlight is none.
    pub fn navigate(&mut self, direction: NavDirection) {
        let count = self.options.len() as i32;
        if count == 0 {
            return;
        }

        let mut index = self.selected_index + direction.step();
        if index < -1 {
            index = count - 1;
        } else if index >= count {
            index = -1;
        }
        self.selected_index = index;
        tracing::trace!(
            target: "typeahead::widget",
            selected_index = index,
            "navigated dropdown"
        );

        if let Some(text) = self.display_value_at(index) {
            self.option_highlighted.emit(text);
        }
    }

    /// Set the selected option index directly.
    ///
    /// No bounds validation is performed; the caller is trusted to pass an
    /// index it obtained from a rendered option. `navigate` is the safe,
    /// wrapping entry point.
    pub fn set_selected_index(&mut self, index: i32) {
        self.selected_index = index;
    }

    /// The display value for an index: the raw input value for -1, the
    /// option's display string otherwise.
    fn display_value_at(&self, index: i32) -> Option<String> {
        if index < 0 {
            Some(self.value.clone())
        } else {
            self.options.display_value(index as usize)
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Handle a change of the input's text content.
    ///
    /// Updates the value, recomputes hint visibility, shows the dropdown,
    /// resets the selection, and emits `text_changed`.
    pub fn handle_text_change(&mut self, event: &TextChangeEvent) {
        self.apply_value(event.text.clone());
        self.refresh_hint();
        self.dropdown_visible = true;
        self.selected_index = -1;
        tracing::trace!(target: "typeahead::widget", value = %self.value, "text changed");
        self.text_changed.emit(self.value.clone());
    }

    /// Handle the input gaining keyboard focus.
    pub fn handle_focus_in(&mut self, _event: &FocusInEvent) {
        self.has_focus = true;
        self.dropdown_visible = true;
        self.focus_gained.emit(());
    }

    /// Handle a press on the input itself.
    ///
    /// Recomputes and shows the hint if completable; the dropdown is left
    /// untouched.
    pub fn handle_press(&mut self, _event: &PressEvent) {
        self.show_hint();
    }

    /// Handle a press on the option at `index`.
    ///
    /// Selects the option, hides hint and dropdown, returns focus to the
    /// input, and emits `option_activated` with the option's index and
    /// display value. For an index the model cannot resolve the state
    /// changes still apply but nothing is emitted.
    pub fn handle_option_press(&mut self, index: usize, _event: &PressEvent) {
        self.selected_index = index as i32;
        self.hint_visible = false;
        self.dropdown_visible = false;
        self.has_focus = true;
        tracing::trace!(target: "typeahead::widget", index, "option pressed");

        if let Some(display) = self.options.display_value(index) {
            self.option_activated.emit((index, display));
        }
    }

    /// Handle a window-level press.
    ///
    /// A press outside the widget's rendered subtree dismisses both the
    /// hint and the dropdown and drops focus; a press inside leaves the
    /// state untouched.
    pub fn handle_window_press(&mut self, event: &WindowPressEvent) {
        let inside = match event.target {
            Some(target) => self
                .registry
                .is_descendant_of(target, self.id)
                .unwrap_or(false),
            None => false,
        };
        if !inside {
            tracing::trace!(target: "typeahead::widget", "outside press, dismissing");
            self.hint_visible = false;
            self.dropdown_visible = false;
            self.has_focus = false;
        }
    }

    /// Handle a key press.
    ///
    /// Returns `true` if the widget reacted to the key. Acceptance of the
    /// event (the prevent-default channel) is set only where the default
    /// host reaction must be suppressed: hint acceptance via Tab/End and
    /// dropdown navigation via the vertical arrows.
    pub fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        match event.key {
            // Accept the hint in place of focus traversal / caret jump.
            Key::Tab | Key::End => {
                if event.modifiers.shift {
                    return false;
                }
                let Some(full) = self.visible_hint() else {
                    return false;
                };
                event.base.accept();
                self.completed.emit(full);
                true
            }

            // A forward arrow at the end of the text accepts the hint.
            // "Forward" depends on the base direction of the typed text.
            Key::ArrowLeft | Key::ArrowRight => {
                if event.modifiers.shift || !self.caret_at_end() {
                    return false;
                }
                let Some(full) = self.visible_hint() else {
                    return false;
                };
                let resolved = self.direction.resolve(&self.value);
                let completes = matches!(
                    (event.key, resolved),
                    (Key::ArrowRight, TextDirection::LeftToRight)
                        | (Key::ArrowLeft, TextDirection::RightToLeft)
                );
                if completes {
                    self.completed.emit(full);
                    true
                } else {
                    false
                }
            }

            Key::Enter | Key::Escape => {
                self.hint_visible = false;
                self.dropdown_visible = false;
                true
            }

            Key::ArrowUp | Key::ArrowDown => {
                if self.options.is_empty() {
                    return false;
                }
                event.base.accept();
                self.show_dropdown();
                let direction = if event.key == Key::ArrowUp {
                    NavDirection::Up
                } else {
                    NavDirection::Down
                };
                self.navigate(direction);
                true
            }

            _ => false,
        }
    }

    // =========================================================================
    // Object Tree
    // =========================================================================

    /// The registry this widget's objects live in.
    pub fn registry(&self) -> &SharedObjectRegistry {
        &self.registry
    }

    /// The registered id of the input subpart.
    pub fn input_object_id(&self) -> ObjectId {
        self.input_id
    }

    /// The registered id of the hint overlay subpart.
    pub fn hint_object_id(&self) -> ObjectId {
        self.hint_id
    }

    /// The registered id of the option list subpart.
    pub fn options_object_id(&self) -> ObjectId {
        self.list_id
    }

    /// Reparent the widget under another registered object (a window, a
    /// form), or detach it by passing `None`.
    pub fn set_parent_object(&self, parent: Option<ObjectId>) -> typeahead_core::Result<()> {
        self.registry.set_parent(self.id, parent)?;
        Ok(())
    }
}

impl Object for Typeahead {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}

impl Drop for Typeahead {
    fn drop(&mut self) {
        // Cascade-destroys the subparts as well.
        let _ = self.registry.destroy(self.id);
    }
}

impl std::fmt::Debug for Typeahead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeahead")
            .field("value", &self.value)
            .field("hint_visible", &self.hint_visible)
            .field("dropdown_visible", &self.dropdown_visible)
            .field("selected_index", &self.selected_index)
            .finish()
    }
}

static_assertions::assert_impl_all!(Typeahead: Send, Sync);
