//! 容量模型
//!
//! 按链路长度把距离映射到离散的容量档位（Mbps）。

/// 一个容量档位：距离不超过 `max_distance_km` 的链路获得 `capacity_mbps`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityTier {
    pub max_distance_km: f64,
    pub capacity_mbps: f64,
}

/// 容量档位表，按 `max_distance_km` 升序排列；超出最后一档的距离使用 `beyond_mbps`。
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityTiers {
    tiers: Vec<CapacityTier>,
    beyond_mbps: f64,
}

impl Default for CapacityTiers {
    fn default() -> Self {
        Self {
            tiers: vec![
                CapacityTier {
                    max_distance_km: 1000.0,
                    capacity_mbps: 100.0,
                },
                CapacityTier {
                    max_distance_km: 2000.0,
                    capacity_mbps: 200.0,
                },
            ],
            beyond_mbps: 300.0,
        }
    }
}

impl CapacityTiers {
    /// 查询距离对应的容量。档位上界是闭区间：恰好 1000 km 仍属于 100 Mbps 档。
    pub fn capacity_for(&self, distance_km: f64) -> f64 {
        self.tiers
            .iter()
            .find(|t| distance_km <= t.max_distance_km)
            .map(|t| t.capacity_mbps)
            .unwrap_or(self.beyond_mbps)
    }

    /// 所有可能出现的容量值（升序）
    pub fn capacities(&self) -> Vec<f64> {
        let mut caps: Vec<f64> = self.tiers.iter().map(|t| t.capacity_mbps).collect();
        caps.push(self.beyond_mbps);
        caps
    }
}

/// 默认档位表下的容量：`<=1000 -> 100`，`<=2000 -> 200`，其余 `300`。
pub fn tier(distance_km: f64) -> f64 {
    CapacityTiers::default().capacity_for(distance_km)
}
