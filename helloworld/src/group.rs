//! Process group membership.
//!
//! The reporter only needs three facts from the runtime: its rank, the size
//! of the world and the processor name. They are read once in
//! [`Group::join`] and never refreshed.
use log::debug;
use mpi::environment::{self, Universe};
use mpi::traits::Communicator;
use crate::error::{Error, Result};

/// Identity of this process within the joined group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Membership {
    rank: i32,
    size: i32,
    host_name: String,
}

impl Membership {
    /// Create a membership, checking that `0 <= rank < size`.
    pub fn new(rank: i32, size: i32, host_name: impl Into<String>) -> Result<Membership> {
        if size < 1 || rank < 0 || rank >= size {
            return Err(Error::InvalidMembership { rank, size });
        }
        Ok(Membership {
            rank,
            size,
            host_name: host_name.into(),
        })
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }
}

/// Runtime that a process joins exactly once.
pub trait Group {
    /// Join the group and return this process's membership.
    fn join(&mut self) -> Result<Membership>;
}

/// MPI world communicator group.
///
/// Holds the universe after a successful join; dropping the group
/// finalizes MPI.
pub struct MpiGroup {
    universe: Option<Universe>,
}

impl MpiGroup {
    pub fn new() -> MpiGroup {
        MpiGroup { universe: None }
    }
}

impl Default for MpiGroup {
    fn default() -> MpiGroup {
        MpiGroup::new()
    }
}

impl Group for MpiGroup {
    fn join(&mut self) -> Result<Membership> {
        // initialize() returns None when MPI is already up
        let universe = mpi::initialize().ok_or(Error::InitFailure)?;
        let world = universe.world();
        let rank = world.rank();
        let size = world.size();
        let host_name = environment::processor_name().map_err(Error::ProcessorName)?;
        if rank == 0 {
            let (version, subversion) = environment::version();
            debug!("MPI standard {}.{}", version, subversion);
            if let Ok(library) = environment::library_version() {
                debug!("MPI library: {}", library.trim_end());
            }
        }
        self.universe = Some(universe);
        Membership::new(rank, size, host_name)
    }
}

/// Group with a fixed membership, no runtime involved.
#[derive(Clone, Debug)]
pub struct StaticGroup {
    membership: Membership,
}

impl StaticGroup {
    /// Single participant group: rank 0 of 1 on `host_name`.
    pub fn new(host_name: impl Into<String>) -> StaticGroup {
        StaticGroup {
            membership: Membership {
                rank: 0,
                size: 1,
                host_name: host_name.into(),
            },
        }
    }

    pub fn with_membership(membership: Membership) -> StaticGroup {
        StaticGroup { membership }
    }
}

impl Group for StaticGroup {
    fn join(&mut self) -> Result<Membership> {
        Ok(self.membership.clone())
    }
}
