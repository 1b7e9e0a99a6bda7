use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug, Default)]
pub struct StatsRecorder {
    pub(crate) stats: StatsAtomics,
}
