//! The public placement engine: wires the Partitioner, Packer, and Placer into the
//! operations described by §6, owns the rewind loop, and exposes a sum-type placement
//! outcome (§9 re-architecture note).

use std::collections::HashMap;

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::bobbin::{Alignment, Bobbin, Orientation};
use crate::compact::compact;
use crate::error::{CoilError, Result};
use crate::insulation::InsulationPlanner;
use crate::model::{Layer, Margin, Section, Turn};
use crate::pack::{pack_section, PackInput};
use crate::partition::{partition, PartitionInput};
use crate::place::{place_section, PlaceInput};
use crate::planar::{pack_planar_layers, place_planar_turns, plan_planar_sections, PlanarInput};
use crate::policy::Policies;
use crate::winding::{resolve_windings, ResolvedWinding, Winding};
use crate::wire::WireSpec;

/// The result of a placement pass (§9 re-architecture note: *optional-returning accessors*
/// replaced with a sum type; §7 *user-visible failure behavior*).
#[derive(Debug, Clone)]
pub enum PlacementOutcome {
    /// Every stage succeeded.
    Placed { sections: Vec<Section>, layers: Vec<Layer>, turns: Vec<Turn> },
    /// Sections were built, but layers and/or turns were not (or only partially were).
    PartiallyPlaced { sections: Vec<Section>, layers: Option<Vec<Layer>> },
    /// No usable geometry was produced; `sections`/`layers` carry whatever partial geometry
    /// existed at the point of failure.
    Failed { error: CoilError, sections: Option<Vec<Section>>, layers: Option<Vec<Layer>> },
}

/// The stack-up configuration for the planar specialization (§4.5), set by
/// `windByPlanarSections`.
#[derive(Debug, Clone)]
struct PlanarConfig {
    stack_up: Vec<usize>,
    inter_winding_insulation: f64,
    insulation_to_core: f64,
    wire_height: f64,
}

/// A coil placement engine instance: a functional description (windings, wire registry,
/// bobbin) plus the configuration operations of §6, holding the last computed geometry.
pub struct Coil {
    windings: Vec<Winding>,
    wires: IndexMap<ArcStr, WireSpec>,
    bobbin: Bobbin,
    policies: Policies,
    insulation: InsulationPlanner,

    pattern: Vec<usize>,
    repetitions: u32,
    proportions: Option<Vec<f64>>,

    layers_orientation_default: Orientation,
    layers_orientation_by_section: HashMap<ArcStr, Orientation>,
    turns_alignment_default: Alignment,
    turns_alignment_by_section: HashMap<ArcStr, Alignment>,

    margins_by_section_index: HashMap<usize, Margin>,

    planar: Option<PlanarConfig>,

    sections: Vec<Section>,
    layers: Vec<Layer>,
    turns: Vec<Turn>,
}

/// Builds a [`Coil`] from a functional description, a bobbin, and initial policies (§9a
/// *Public API surface*).
pub struct CoilBuilder {
    windings: Vec<Winding>,
    wires: IndexMap<ArcStr, WireSpec>,
    bobbin: Option<Bobbin>,
    policies: Policies,
}

impl Default for CoilBuilder {
    fn default() -> Self {
        Self {
            windings: Vec::new(),
            wires: IndexMap::new(),
            bobbin: None,
            policies: Policies::snapshot(),
        }
    }
}

impl CoilBuilder {
    /// Starts a builder with no windings, an empty wire registry, and the process-wide
    /// default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one winding to the functional description.
    pub fn winding(mut self, winding: Winding) -> Self {
        self.windings.push(winding);
        self
    }

    /// Registers a wire specification under `name`, referenced by `Winding::wire`.
    pub fn wire(mut self, name: impl Into<ArcStr>, wire: WireSpec) -> Self {
        self.wires.insert(name.into(), wire);
        self
    }

    /// Sets the bobbin this coil is wound inside.
    pub fn bobbin(mut self, bobbin: Bobbin) -> Self {
        self.bobbin = Some(bobbin);
        self
    }

    /// Overrides the policies this coil starts with; defaults to `Policies::snapshot()`.
    pub fn policies(mut self, policies: Policies) -> Self {
        self.policies = policies;
        self
    }

    /// Builds the [`Coil`]. Fails if no bobbin was supplied.
    pub fn build(self) -> Result<Coil> {
        let bobbin = self
            .bobbin
            .ok_or_else(|| CoilError::InvalidConfiguration("no bobbin supplied to CoilBuilder".into()))?;
        let pattern: Vec<usize> = (0..self.windings.len()).collect();
        Ok(Coil {
            windings: self.windings,
            wires: self.wires,
            bobbin,
            policies: self.policies,
            insulation: InsulationPlanner::new(),
            pattern,
            repetitions: 1,
            proportions: None,
            layers_orientation_default: Orientation::Contiguous,
            layers_orientation_by_section: HashMap::new(),
            turns_alignment_default: Alignment::Centered,
            turns_alignment_by_section: HashMap::new(),
            margins_by_section_index: HashMap::new(),
            planar: None,
            sections: Vec::new(),
            layers: Vec::new(),
            turns: Vec::new(),
        })
    }
}

impl Coil {
    /// Starts a [`CoilBuilder`].
    pub fn builder() -> CoilBuilder {
        CoilBuilder::new()
    }

    fn resolved_windings(&self) -> Result<Vec<ResolvedWinding>> {
        resolve_windings(&self.windings, &self.wires)
    }

    fn layers_orientation_for(&self, section: &ArcStr) -> Orientation {
        self.layers_orientation_by_section
            .get(section)
            .copied()
            .unwrap_or(self.layers_orientation_default)
    }

    fn turns_alignment_for(&self, section: &ArcStr) -> Alignment {
        self.turns_alignment_by_section
            .get(section)
            .copied()
            .unwrap_or(self.turns_alignment_default)
    }

    // ---- §6 configuration setters ----

    /// `setInterleavingLevel(k)`: sets the number of times the winding pattern repeats.
    pub fn set_interleaving_level(&mut self, k: u32) {
        self.repetitions = k.max(1);
    }

    /// `setWindingOrientation(o)`: sets the bobbin's section orientation.
    pub fn set_winding_orientation(&mut self, orientation: Orientation) {
        self.bobbin.sections_orientation = orientation;
    }

    /// `setLayersOrientation(o, sectionName?)`: sets the global default, or a per-section
    /// override when `section` is `Some` (§9 re-architecture note: one setter, not two
    /// overloads).
    pub fn set_layers_orientation(&mut self, orientation: Orientation, section: Option<ArcStr>) {
        match section {
            Some(name) => {
                self.layers_orientation_by_section.insert(name, orientation);
            }
            None => self.layers_orientation_default = orientation,
        }
    }

    /// `setTurnsAlignment(a, sectionName?)`.
    pub fn set_turns_alignment(&mut self, alignment: Alignment, section: Option<ArcStr>) {
        match section {
            Some(name) => {
                self.turns_alignment_by_section.insert(name, alignment);
            }
            None => self.turns_alignment_default = alignment,
        }
    }

    /// `setSectionAlignment(a)`: sets the bobbin's section cross-axis alignment.
    pub fn set_section_alignment(&mut self, alignment: Alignment) {
        self.bobbin.sections_alignment = alignment;
    }

    /// `setIntersectionInsulation(...)`.
    pub fn set_intersection_insulation(&mut self, thickness: f64, material: Option<ArcStr>, apply_to_winding: Option<ArcStr>) {
        self.insulation.intersection_insulation(thickness, material, apply_to_winding);
    }

    /// `setInterlayerInsulation(...)`.
    pub fn set_interlayer_insulation(&mut self, thickness: f64, material: Option<ArcStr>, apply_to_winding: Option<ArcStr>) {
        self.insulation.interlayer_insulation(thickness, material, apply_to_winding);
    }

    /// `calculateCustomThicknessInsulation(t)`.
    pub fn calculate_custom_thickness_insulation(&mut self, thickness: f64) {
        self.insulation.custom_thickness_insulation(thickness);
    }

    /// `preloadMargins(...)`: seeds a section's `[low, high]` margin by its index in the
    /// last-computed section list. Re-placement is required to observe the effect.
    pub fn preload_margins(&mut self, margins: impl IntoIterator<Item = (usize, Margin)>) {
        self.margins_by_section_index.extend(margins);
    }

    /// `addMarginToSectionByIndex(i, [low, high])`: mutates one section's margin and
    /// re-runs layers+turns for the whole coil (margins shift every downstream offset).
    ///
    /// If `coilEqualizeMargins` is set, the margin is first rebalanced around its own slack
    /// (`Margin::equalized`) before being applied.
    pub fn add_margin_to_section_by_index(&mut self, index: usize, margin: Margin) -> Result<PlacementOutcome> {
        let margin = if self.policies.equalize_margins { margin.equalized() } else { margin };
        self.margins_by_section_index.insert(index, margin);
        self.wind()
    }

    // ---- planar configuration ----

    /// `windByPlanarSections(stackUp, interWindingInsulation, insulationToCore)`.
    pub fn wind_by_planar_sections(
        &mut self,
        stack_up: Vec<usize>,
        inter_winding_insulation: f64,
        insulation_to_core: f64,
    ) -> Result<()> {
        self.planar = Some(PlanarConfig {
            stack_up,
            inter_winding_insulation,
            insulation_to_core,
            wire_height: self.planar.as_ref().map(|p| p.wire_height).unwrap_or(0.035),
        });
        let resolved = self.resolved_windings()?;
        let input = self.planar_input(&resolved)?;
        self.sections = plan_planar_sections(&input)?;
        Ok(())
    }

    fn planar_input<'a>(&self, resolved: &'a [ResolvedWinding]) -> Result<PlanarInput<'a>> {
        let cfg = self
            .planar
            .as_ref()
            .ok_or_else(|| CoilError::InvalidConfiguration("windByPlanarSections was not called".into()))?;
        Ok(PlanarInput {
            windings: resolved,
            stack_up: &cfg.stack_up,
            inter_winding_insulation: cfg.inter_winding_insulation,
            insulation_to_core: cfg.insulation_to_core,
            bobbin: &self.bobbin,
            wire_height: cfg.wire_height,
            turns_alignment: self.turns_alignment_default,
        })
    }

    /// `windByPlanarLayers()`.
    pub fn wind_by_planar_layers(&mut self) -> Result<()> {
        let resolved = self.resolved_windings()?;
        let input = self.planar_input(&resolved)?;
        self.layers = pack_planar_layers(&self.sections, &input)?;
        Ok(())
    }

    /// `windByPlanarTurns(interLayerInsulation, distanceToCore)`. The two parameters name
    /// the same quantities `windByPlanarSections` already captured; re-supplying them here
    /// lets the caller re-place turns without re-partitioning.
    pub fn wind_by_planar_turns(&mut self, inter_layer_insulation: f64, distance_to_core: f64) -> Result<()> {
        if let Some(cfg) = &mut self.planar {
            cfg.inter_winding_insulation = inter_layer_insulation;
            cfg.insulation_to_core = distance_to_core;
        }
        let resolved = self.resolved_windings()?;
        let input = self.planar_input(&resolved)?;
        self.turns = place_planar_turns(&self.sections, &self.layers, &input)?;
        Ok(())
    }

    // ---- §6 stage triggers ----

    /// `windBySections(proportions?, pattern?, repetitions?)`.
    pub fn wind_by_sections(&mut self, proportions: Option<Vec<f64>>, pattern: Option<Vec<usize>>, repetitions: Option<u32>) -> Result<()> {
        if let Some(p) = pattern {
            self.pattern = p;
        }
        if let Some(r) = repetitions {
            self.repetitions = r.max(1);
        }
        if proportions.is_some() {
            self.proportions = proportions;
        }
        self.partition_sections(self.policies.wind_even_if_not_fit)
    }

    /// The Partitioner stage itself, with `wind_even_if_not_fit` taken as a parameter rather
    /// than read off `self.policies`, so the rewind loop in [`Self::wind`] can re-partition
    /// with a relaxed value on retry instead of being stuck with whatever was captured on the
    /// first pass.
    fn partition_sections(&mut self, wind_even_if_not_fit: bool) -> Result<()> {
        let resolved = self.resolved_windings()?;
        let input = PartitionInput {
            windings: &resolved,
            pattern: &self.pattern,
            repetitions: self.repetitions,
            proportions: self.proportions.as_deref(),
            bobbin: &self.bobbin,
            insulation: &self.insulation,
            wind_even_if_not_fit,
        };
        self.sections = partition(&input)?;
        for section in &mut self.sections {
            section.layers_orientation = self.layers_orientation_by_section.get(&section.name).copied().unwrap_or(self.layers_orientation_default);
        }
        for (&index, margin) in &self.margins_by_section_index {
            if let Some(section) = self.sections.get_mut(index) {
                section.margin = *margin;
            }
        }
        Ok(())
    }

    /// `windByLayers()`: packs every already-partitioned section, honoring per-section
    /// `turnsAlignment` overrides.
    pub fn wind_by_layers(&mut self) -> Result<()> {
        let resolved = self.resolved_windings()?;
        let mut layers = Vec::new();
        for section in &self.sections {
            if section.is_insulation() {
                continue;
            }
            let pack_input = PackInput {
                windings: &resolved,
                sections_orientation: self.bobbin.sections_orientation,
                insulation: &self.insulation,
                turns_alignment: self.turns_alignment_for(&section.name),
                wind_even_if_not_fit: self.policies.wind_even_if_not_fit,
            };
            layers.extend(pack_section(section, &pack_input)?);
        }
        self.layers = layers;
        Ok(())
    }

    /// `windByTurns()`: places every already-packed layer's turns, honoring per-section
    /// `turnsAlignment` overrides.
    pub fn wind_by_turns(&mut self) -> Result<()> {
        let resolved = self.resolved_windings()?;
        let mut turns = Vec::new();
        for section in &self.sections {
            if section.is_insulation() {
                continue;
            }
            let place_input = PlaceInput {
                windings: &resolved,
                bobbin: &self.bobbin,
                turns_alignment: self.turns_alignment_for(&section.name),
                insulation: &self.insulation,
                wind_even_if_not_fit: self.policies.wind_even_if_not_fit,
            };
            turns.extend(place_section(section, &place_input)?);
        }
        self.turns = turns;
        Ok(())
    }

    /// `wind(...)`: runs all three stages end-to-end, with the rewind loop (§4.3, §9).
    ///
    /// On a Partitioner, Packer, or Placer failure, if `coilTryRewind` is set, retries up to
    /// `maxRewinds` times with `coilWindEvenIfNotFit` forced on before propagating the final
    /// error. The Partitioner runs on every attempt (not just the first) so a relaxed
    /// `coilWindEvenIfNotFit` reaches `partition` itself, not only `pack`/`place`.
    pub fn wind(&mut self) -> Result<PlacementOutcome> {
        if self.planar.is_some() {
            return self.wind_planar();
        }

        let mut relax = self.policies.wind_even_if_not_fit;
        let mut attempt = 0u32;
        loop {
            if let Err(e) = self.partition_sections(relax) {
                if self.can_rewind(attempt) {
                    tracing::warn!(attempt, error = ?e, "rewinding: relaxing wind_even_if_not_fit after Partitioner failure");
                    relax = true;
                    attempt += 1;
                    continue;
                }
                tracing::error!(error = ?e, "partitioning failed");
                return Ok(PlacementOutcome::Failed { error: e, sections: None, layers: None });
            }

            let pack_result = self.pack_all(relax);
            match pack_result {
                Ok(layers) => {
                    let place_result = self.place_all(relax);
                    match place_result {
                        Ok(turns) => {
                            self.layers = layers;
                            self.turns = turns;
                            self.compact_if_requested();
                            return Ok(PlacementOutcome::Placed {
                                sections: self.sections.clone(),
                                layers: self.layers.clone(),
                                turns: self.turns.clone(),
                            });
                        }
                        Err(e) => {
                            if self.can_rewind(attempt) {
                                tracing::warn!(attempt, error = ?e, "rewinding: relaxing wind_even_if_not_fit after Placer failure");
                                relax = true;
                                attempt += 1;
                                continue;
                            }
                            tracing::error!(error = ?e, "placement failed");
                            self.layers = layers.clone();
                            return Ok(PlacementOutcome::PartiallyPlaced { sections: self.sections.clone(), layers: Some(layers) });
                        }
                    }
                }
                Err(e) => {
                    if self.can_rewind(attempt) {
                        tracing::warn!(attempt, error = ?e, "rewinding: relaxing wind_even_if_not_fit after Packer failure");
                        relax = true;
                        attempt += 1;
                        continue;
                    }
                    tracing::error!(error = ?e, "packing failed");
                    return Ok(PlacementOutcome::Failed { error: e, sections: Some(self.sections.clone()), layers: None });
                }
            }
        }
    }

    fn can_rewind(&self, attempt: u32) -> bool {
        self.policies.try_rewind && attempt < self.policies.max_rewinds
    }

    fn pack_all(&self, wind_even_if_not_fit: bool) -> Result<Vec<Layer>> {
        let resolved = self.resolved_windings()?;
        let mut layers = Vec::new();
        for section in &self.sections {
            if section.is_insulation() {
                continue;
            }
            let pack_input = PackInput {
                windings: &resolved,
                sections_orientation: self.bobbin.sections_orientation,
                insulation: &self.insulation,
                turns_alignment: self.turns_alignment_for(&section.name),
                wind_even_if_not_fit,
            };
            layers.extend(pack_section(section, &pack_input)?);
        }
        Ok(layers)
    }

    fn place_all(&self, wind_even_if_not_fit: bool) -> Result<Vec<Turn>> {
        let resolved = self.resolved_windings()?;
        let mut turns = Vec::new();
        for section in &self.sections {
            if section.is_insulation() {
                continue;
            }
            let place_input = PlaceInput {
                windings: &resolved,
                bobbin: &self.bobbin,
                turns_alignment: self.turns_alignment_for(&section.name),
                insulation: &self.insulation,
                wind_even_if_not_fit,
            };
            turns.extend(place_section(section, &place_input)?);
        }
        Ok(turns)
    }

    fn wind_planar(&mut self) -> Result<PlacementOutcome> {
        self.wind_by_planar_sections_from_config()?;
        self.wind_by_planar_layers()?;
        let resolved = self.resolved_windings()?;
        let input = self.planar_input(&resolved)?;
        self.turns = place_planar_turns(&self.sections, &self.layers, &input)?;
        self.compact_if_requested();
        Ok(PlacementOutcome::Placed {
            sections: self.sections.clone(),
            layers: self.layers.clone(),
            turns: self.turns.clone(),
        })
    }

    /// Runs the compaction/delimiting post-pass (§4.3) over the current geometry when
    /// `coilDelimitAndCompact` is set. A no-op otherwise.
    fn compact_if_requested(&mut self) {
        if !self.policies.delimit_and_compact {
            return;
        }
        compact(
            &mut self.sections,
            &mut self.layers,
            &mut self.turns,
            self.bobbin.sections_orientation,
            self.bobbin.sections_alignment,
        );
    }

    fn wind_by_planar_sections_from_config(&mut self) -> Result<()> {
        let resolved = self.resolved_windings()?;
        let input = self.planar_input(&resolved)?;
        self.sections = plan_planar_sections(&input)?;
        Ok(())
    }

    // ---- §6 accessors ----

    /// `getSectionsDescription()`.
    pub fn sections_description(&self) -> &[Section] {
        &self.sections
    }

    /// `getSectionsDescriptionConduction()`.
    pub fn sections_description_conduction(&self) -> Vec<&Section> {
        self.sections.iter().filter(|s| !s.is_insulation()).collect()
    }

    /// `getLayersDescription()`.
    pub fn layers_description(&self) -> &[Layer] {
        &self.layers
    }

    /// `getTurnsDescription()`.
    pub fn turns_description(&self) -> &[Turn] {
        &self.turns
    }

    /// `virtualizeFunctionalDescription()`.
    pub fn virtualize_functional_description(&self) -> Result<Vec<ResolvedWinding>> {
        self.resolved_windings()
    }

    /// `convertTurnsToPolarCoordinates()`: a no-op in Cartesian mode (there are no polar
    /// coordinates to surface); in polar mode, returns the already-computed
    /// `additionalCoordinates` for every turn (§9a).
    pub fn convert_turns_to_polar_coordinates(&self) -> Vec<Option<(geometry::prelude::Point, geometry::prelude::Point)>> {
        self.turns.iter().map(|t| t.additional_coordinates).collect()
    }

    /// `guessRoundWireFromDcResistance([R…], length)`.
    pub fn guess_round_wire_from_dc_resistance(targets: &[f64], mean_turn_length: f64) -> Vec<Option<WireSpec>> {
        crate::wire_table::guess_round_wires(targets, mean_turn_length)
    }
}
