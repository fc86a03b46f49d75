//! Windings and their virtualization into merged `woundWith` groups.

use std::collections::HashMap;

use arcstr::ArcStr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoilError, Result};
use crate::wire::WireSpec;

/// The electrical side a winding is isolated to, e.g. `primary`, `secondary`, `tertiary`.
///
/// Modeled as an open string rather than a closed enum: isolation sides are caller-defined
/// and looked up against an external insulation table (§6), so the engine does not need to
/// enumerate them.
pub type IsolationSide = ArcStr;

/// An electrical winding, as supplied by the caller (§3 *Winding*).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winding {
    /// The winding's identity name.
    pub name: ArcStr,
    /// The number of turns, `N >= 1`.
    pub turns: usize,
    /// The number of parallel strands, `P >= 1`.
    pub parallels: usize,
    /// The isolation side this winding belongs to.
    pub isolation_side: IsolationSide,
    /// The name of the wire specification used for every turn of this winding.
    pub wire: ArcStr,
    /// Other windings that share this winding's physical section, if any.
    pub wound_with: Vec<ArcStr>,
}

impl Winding {
    /// Creates a new winding with no `woundWith` grouping.
    pub fn new(
        name: impl Into<ArcStr>,
        turns: usize,
        parallels: usize,
        isolation_side: impl Into<ArcStr>,
        wire: impl Into<ArcStr>,
    ) -> Self {
        Self {
            name: name.into(),
            turns,
            parallels,
            isolation_side: isolation_side.into(),
            wire: wire.into(),
            wound_with: Vec::new(),
        }
    }
}

/// A virtual winding produced by merging a `woundWith` group (§4.1 *Virtualization*).
///
/// A winding with no group of its own becomes a virtual winding of one member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualWinding {
    /// The names of the physical windings merged into this virtual winding, in input order.
    pub members: Vec<ArcStr>,
    /// The merged turn count: the sum of each member's turn count.
    pub turns: usize,
    /// The shared parallel count of the group.
    pub parallels: usize,
    /// The isolation side shared by every member of the group.
    pub isolation_side: IsolationSide,
}

impl VirtualWinding {
    /// A display name for this virtual winding: its sole member's name, or the members
    /// joined with `+` when more than one winding was merged.
    pub fn name(&self) -> ArcStr {
        if self.members.len() == 1 {
            self.members[0].clone()
        } else {
            ArcStr::from(self.members.join("+"))
        }
    }
}

/// Merges `windings` into [`VirtualWinding`]s by following their `woundWith` lists.
///
/// A group is valid only if the `woundWith` relation among its members is symmetric and
/// transitive, and every member shares the same isolation side and parallel count; otherwise
/// this function fails with [`CoilError::InvalidGrouping`].
///
/// See §4.1 *Virtualization*.
pub fn virtualize(windings: &[Winding]) -> Result<Vec<VirtualWinding>> {
    let by_name: std::collections::HashMap<&ArcStr, &Winding> =
        windings.iter().map(|w| (&w.name, w)).collect();

    for w in windings {
        for other in &w.wound_with {
            let Some(partner) = by_name.get(other) else {
                return Err(CoilError::InvalidGrouping(format!(
                    "winding `{}` names unknown winding `{}` in woundWith",
                    w.name, other
                )));
            };
            if !partner.wound_with.contains(&w.name) {
                return Err(CoilError::InvalidGrouping(format!(
                    "woundWith is not symmetric between `{}` and `{}`",
                    w.name, other
                )));
            }
            if partner.isolation_side != w.isolation_side {
                return Err(CoilError::InvalidGrouping(format!(
                    "woundWith group `{}`/`{}` spans isolation sides `{}` and `{}`",
                    w.name, other, w.isolation_side, partner.isolation_side
                )));
            }
            if partner.parallels != w.parallels {
                return Err(CoilError::InvalidGrouping(format!(
                    "woundWith group `{}`/`{}` has mismatched parallel counts",
                    w.name, other
                )));
            }
        }
    }

    let mut visited = std::collections::HashSet::new();
    let mut groups = Vec::new();

    for w in windings {
        if visited.contains(&w.name) {
            continue;
        }
        let mut group = vec![w.name.clone()];
        let mut frontier = w.wound_with.clone();
        visited.insert(w.name.clone());
        while let Some(next) = frontier.pop() {
            if visited.contains(&next) {
                continue;
            }
            visited.insert(next.clone());
            let next_winding = by_name[&next];
            for transitive in &next_winding.wound_with {
                if !visited.contains(transitive) {
                    frontier.push(transitive.clone());
                }
            }
            group.push(next);
        }

        for member in &group {
            let member_winding = by_name[member];
            for other_member in &group {
                if member_winding.name != *other_member && !member_winding.wound_with.contains(other_member)
                {
                    return Err(CoilError::InvalidGrouping(format!(
                        "woundWith is not transitive: `{}` does not name `{}` despite sharing a group",
                        member_winding.name, other_member
                    )));
                }
            }
        }

        let turns = group.iter().map(|m| by_name[m].turns).sum();
        groups.push(VirtualWinding {
            parallels: w.parallels,
            isolation_side: w.isolation_side.clone(),
            turns,
            members: group,
        });
    }

    Ok(groups)
}

/// A virtual winding paired with the wire used to size it (§4.1, §4.2, §4.3 all key their
/// geometry off a winding's wire).
///
/// The wire of a `woundWith` group is the first member's wire; members of one group are not
/// required to share a wire spec, but in practice they do (same isolation side, same
/// physical conductor). See `DESIGN.md` for this resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWinding {
    /// The merged winding this entry describes.
    pub virtual_winding: VirtualWinding,
    /// The wire used to size every turn of this (virtual) winding.
    pub wire: WireSpec,
}

/// Virtualizes `windings` and resolves each resulting group's wire from `wires`, a registry
/// keyed by wire name (§6 *Wire registry*). Kept as an [`IndexMap`] rather than a `HashMap`
/// so a registry walked in full (e.g. for diagnostics or re-serialization) reproduces the
/// caller's registration order rather than an arbitrary hash order.
///
/// Fails with [`CoilError::InvalidConfiguration`] if a winding names a wire absent from
/// `wires`.
pub fn resolve_windings(
    windings: &[Winding],
    wires: &IndexMap<ArcStr, WireSpec>,
) -> Result<Vec<ResolvedWinding>> {
    let virtual_windings = virtualize(windings)?;
    let by_name: HashMap<&ArcStr, &Winding> = windings.iter().map(|w| (&w.name, w)).collect();

    virtual_windings
        .into_iter()
        .map(|virtual_winding| {
            let first = &virtual_winding.members[0];
            let physical = by_name[first];
            let wire = wires.get(&physical.wire).cloned().ok_or_else(|| {
                CoilError::InvalidConfiguration(format!(
                    "winding `{}` names unknown wire `{}`",
                    physical.name, physical.wire
                ))
            })?;
            Ok(ResolvedWinding {
                virtual_winding,
                wire,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_windings_become_singleton_virtual_windings() {
        let windings = vec![
            Winding::new("primary", 10, 1, "primary", "24awg"),
            Winding::new("secondary", 5, 2, "secondary", "22awg"),
        ];
        let virt = virtualize(&windings).unwrap();
        assert_eq!(virt.len(), 2);
        assert_eq!(virt[0].turns, 10);
        assert_eq!(virt[1].turns, 5);
    }

    #[test]
    fn wound_with_merges_into_one_virtual_winding() {
        let mut a = Winding::new("a", 5, 1, "primary", "24awg");
        let mut b = Winding::new("b", 5, 1, "primary", "24awg");
        a.wound_with.push("b".into());
        b.wound_with.push("a".into());
        let virt = virtualize(&[a, b]).unwrap();
        assert_eq!(virt.len(), 1);
        assert_eq!(virt[0].turns, 10);
        assert_eq!(virt[0].members.len(), 2);
    }

    #[test]
    fn asymmetric_wound_with_fails() {
        let mut a = Winding::new("a", 5, 1, "primary", "24awg");
        let b = Winding::new("b", 5, 1, "primary", "24awg");
        a.wound_with.push("b".into());
        let err = virtualize(&[a, b]).unwrap_err();
        assert!(matches!(err, CoilError::InvalidGrouping(_)));
    }

    #[test]
    fn cross_isolation_side_wound_with_fails() {
        let mut a = Winding::new("a", 5, 1, "primary", "24awg");
        let mut b = Winding::new("b", 5, 1, "secondary", "24awg");
        a.wound_with.push("b".into());
        b.wound_with.push("a".into());
        let err = virtualize(&[a, b]).unwrap_err();
        assert!(matches!(err, CoilError::InvalidGrouping(_)));
    }

    #[test]
    fn resolve_windings_looks_up_wire_by_name() {
        let windings = vec![Winding::new("primary", 10, 1, "primary", "24awg")];
        let mut wires = IndexMap::new();
        wires.insert(ArcStr::from("24awg"), WireSpec::round(0.45, 0.509, "copper"));
        let resolved = resolve_windings(&windings, &wires).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].wire.nominal_outer_diameter, Some(0.509));
    }

    #[test]
    fn resolve_windings_fails_on_unknown_wire() {
        let windings = vec![Winding::new("primary", 10, 1, "primary", "missing")];
        let wires: IndexMap<ArcStr, WireSpec> = IndexMap::new();
        let err = resolve_windings(&windings, &wires).unwrap_err();
        assert!(matches!(err, CoilError::InvalidConfiguration(_)));
    }
}
