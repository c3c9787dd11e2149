// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
pub enum FeatureDetectorBehaviour {
    None,
    ForceAesClmulTrue,
    ForceAesClmulFalse,
}

pub struct FeatureDetector {
    #[cfg(test)]
    behaviour: FeatureDetectorBehaviour,
}

impl FeatureDetector {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            #[cfg(test)]
            behaviour: FeatureDetectorBehaviour::None,
        }
    }

    // Platform-level AES + carry-less multiply detection (no test override)
    #[inline(always)]
    pub fn platform_has_aes_clmul(&self) -> bool {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            cpufeatures::new!(aes_clmul_detection, "aes", "pclmulqdq");
            aes_clmul_detection::get()
        }

        // On aarch64 the "aes" feature covers PMULL as well.
        #[cfg(target_arch = "aarch64")]
        {
            cpufeatures::new!(aes_pmull_detection, "aes");
            aes_pmull_detection::get()
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
        false
    }

    #[inline(always)]
    pub fn has_aes_clmul(&self) -> bool {
        #[cfg(test)]
        {
            match self.behaviour {
                FeatureDetectorBehaviour::None => self.platform_has_aes_clmul(),
                FeatureDetectorBehaviour::ForceAesClmulTrue => true,
                FeatureDetectorBehaviour::ForceAesClmulFalse => false,
            }
        }

        #[cfg(not(test))]
        self.platform_has_aes_clmul()
    }

    #[cfg(test)]
    pub fn change_behaviour(&mut self, behaviour: FeatureDetectorBehaviour) {
        self.behaviour = behaviour;
    }
}
