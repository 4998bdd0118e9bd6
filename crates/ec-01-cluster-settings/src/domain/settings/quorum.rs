//! Replication quorum sizing.
//!
//! A write is provisionally durable once `prepare_ack_count` nodes (leader
//! included) acknowledge the prepare phase, and visible to readers once
//! `commit_ack_count` nodes acknowledge the commit. Both are fixed for the
//! lifetime of the settings.
//!
//! When both counts are a strict majority of the cluster, any two quorums
//! share at least one node, so two concurrently committed writes can never
//! be invisible to each other.

use std::fmt;

/// Cluster size and acknowledgement thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuorumSettings {
    pub cluster_node_count: usize,
    pub prepare_ack_count: usize,
    pub commit_ack_count: usize,
}

/// Outcome of checking the thresholds against the majority rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuorumHealth {
    /// Both thresholds are a strict majority.
    Majority,
    /// Below majority on a single-node or explicitly degraded deployment.
    SingleNode,
    /// At least one threshold can be met by a minority partition.
    BelowMajority {
        prepare_ack_count: usize,
        commit_ack_count: usize,
        majority: usize,
    },
}

impl QuorumHealth {
    /// Whether the thresholds are safe against split-brain or sanctioned.
    pub fn is_sanctioned(&self) -> bool {
        !matches!(self, Self::BelowMajority { .. })
    }
}

impl fmt::Display for QuorumHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Majority => f.write_str("majority"),
            Self::SingleNode => f.write_str("single node"),
            Self::BelowMajority {
                prepare_ack_count,
                commit_ack_count,
                majority,
            } => write!(
                f,
                "below majority (prepare {prepare_ack_count}, commit {commit_ack_count}, majority {majority})"
            ),
        }
    }
}

impl QuorumSettings {
    /// Smallest node count that is a strict majority of the cluster.
    pub fn majority(&self) -> usize {
        self.cluster_node_count / 2 + 1
    }

    /// Whether `ack_count` acknowledgements form a strict majority.
    pub fn is_majority(&self, ack_count: usize) -> bool {
        ack_count >= self.majority()
    }

    /// Check the thresholds against the majority rule.
    ///
    /// `gossip_on_single_node` marks a deployment that deliberately runs
    /// without majority semantics.
    pub fn assess(&self, gossip_on_single_node: bool) -> QuorumHealth {
        if self.is_majority(self.prepare_ack_count) && self.is_majority(self.commit_ack_count) {
            return QuorumHealth::Majority;
        }
        if self.cluster_node_count == 1 || gossip_on_single_node {
            return QuorumHealth::SingleNode;
        }
        QuorumHealth::BelowMajority {
            prepare_ack_count: self.prepare_ack_count,
            commit_ack_count: self.commit_ack_count,
            majority: self.majority(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quorum(n: usize, prepare: usize, commit: usize) -> QuorumSettings {
        QuorumSettings {
            cluster_node_count: n,
            prepare_ack_count: prepare,
            commit_ack_count: commit,
        }
    }

    #[test]
    fn test_majority_sizes() {
        assert_eq!(quorum(1, 1, 1).majority(), 1);
        assert_eq!(quorum(2, 1, 1).majority(), 2);
        assert_eq!(quorum(3, 1, 1).majority(), 2);
        assert_eq!(quorum(4, 1, 1).majority(), 3);
        assert_eq!(quorum(5, 1, 1).majority(), 3);
    }

    #[test]
    fn test_two_of_three_is_majority() {
        assert_eq!(quorum(3, 2, 2).assess(false), QuorumHealth::Majority);
    }

    #[test]
    fn test_single_node_is_majority_of_one() {
        assert_eq!(quorum(1, 1, 1).assess(true), QuorumHealth::Majority);
    }

    #[test]
    fn test_minority_commit_is_flagged() {
        let health = quorum(5, 3, 2).assess(false);

        assert_eq!(
            health,
            QuorumHealth::BelowMajority {
                prepare_ack_count: 3,
                commit_ack_count: 2,
                majority: 3,
            }
        );
        assert!(!health.is_sanctioned());
    }

    #[test]
    fn test_degraded_cluster_is_sanctioned() {
        let health = quorum(3, 1, 1).assess(true);
        assert_eq!(health, QuorumHealth::SingleNode);
        assert!(health.is_sanctioned());
    }

    #[test]
    fn test_even_split_is_not_majority() {
        // Two disjoint halves of four nodes could each gather two acks.
        assert!(!quorum(4, 2, 2).assess(false).is_sanctioned());
    }
}
