//! Decorative dashboard fixtures.
//!
//! [`Metrics`] are random display numbers regenerated on every request;
//! [`USE_CASES`] is a fixed catalog of industry applications. Neither carries
//! domain logic.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;

/// Bounds for the randomized metrics, half-open.
pub mod bounds {
    use std::ops::Range;

    pub const DELIVERY_TIME: Range<u32> = 5..10;
    pub const OPTIMIZATION: Range<u32> = 80..100;
    pub const EFFICIENCY: Range<u32> = 0..100;
    pub const QUANTUM_PROCESSING: Range<u32> = 0..100;
    pub const NEURAL_NETWORKS: Range<u32> = 1..101;
    pub const DATA_POINTS: Range<u32> = 5000..6000;
}

/// Numbers and labels shown by the dashboard widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub delivery_time: u32,
    pub optimization: u32,
    pub efficiency: u32,
    pub revenue: &'static str,
    pub team: &'static str,
    pub infrastructure: &'static str,
    pub office: &'static str,
    pub orders: u32,
    pub growth: &'static str,
    pub quantum_processing: u32,
    pub neural_networks: u32,
    pub data_points: u32,
}

impl Metrics {
    /// Draw a fresh set of metrics from `rng`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut draw = |range: Range<u32>| rng.gen_range(range);
        Self {
            delivery_time: draw(bounds::DELIVERY_TIME),
            optimization: draw(bounds::OPTIMIZATION),
            efficiency: draw(bounds::EFFICIENCY),
            revenue: "₹1.5Cr",
            team: "40%",
            infrastructure: "45%",
            office: "9%",
            orders: 400,
            growth: "250%",
            quantum_processing: draw(bounds::QUANTUM_PROCESSING),
            neural_networks: draw(bounds::NEURAL_NETWORKS),
            data_points: draw(bounds::DATA_POINTS),
        }
    }

    /// Draw a fresh set of metrics from the thread-local generator.
    #[must_use]
    pub fn sample() -> Self {
        Self::generate(&mut rand::thread_rng())
    }
}

/// One industry application shown in the use-case showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon key understood by the front-end icon set.
    pub icon: &'static str,
    pub category: &'static str,
    pub impact: &'static str,
    pub quantum_advantage: &'static str,
    pub capabilities: &'static [&'static str],
}

pub static USE_CASES: [UseCase; 11] = [
    UseCase {
        id: 1,
        name: "Supply Chain",
        description: "End-to-end supply chain optimization with quantum-powered logistics",
        icon: "Package",
        category: "Operations",
        impact: "85% cost reduction",
        quantum_advantage: "Multi-parameter route optimization across global networks",
        capabilities: &[
            "Real-time inventory management",
            "Predictive demand forecasting",
            "Dynamic pricing optimization",
        ],
    },
    UseCase {
        id: 2,
        name: "Life Sciences",
        description: "Drug discovery and molecular simulation acceleration",
        icon: "Microscope",
        category: "Healthcare",
        impact: "70% faster drug discovery",
        quantum_advantage: "Molecular interaction modeling at quantum scale",
        capabilities: &[
            "Protein folding prediction",
            "Drug-target interaction",
            "Clinical trial optimization",
        ],
    },
    UseCase {
        id: 3,
        name: "Drone Systems",
        description: "Autonomous fleet coordination and airspace optimization",
        icon: "Drone",
        category: "Aviation",
        impact: "90% efficiency increase",
        quantum_advantage: "Real-time multi-drone path planning in complex environments",
        capabilities: &[
            "Swarm intelligence",
            "Weather pattern analysis",
            "Collision avoidance algorithms",
        ],
    },
    UseCase {
        id: 4,
        name: "Simulation",
        description: "High-fidelity quantum simulations for complex systems",
        icon: "Cpu",
        category: "Computing",
        impact: "1000x computation speed",
        quantum_advantage: "Quantum superposition for parallel scenario modeling",
        capabilities: &[
            "Climate modeling",
            "Material science simulation",
            "Financial risk modeling",
        ],
    },
    UseCase {
        id: 5,
        name: "Financial Sector",
        description: "Risk assessment and algorithmic trading optimization",
        icon: "TrendingUp",
        category: "Finance",
        impact: "95% risk reduction",
        quantum_advantage: "Quantum machine learning for market prediction",
        capabilities: &[
            "Portfolio optimization",
            "Fraud detection",
            "Credit risk analysis",
        ],
    },
    UseCase {
        id: 6,
        name: "Automotive Sector",
        description: "Autonomous vehicle decision-making and traffic optimization",
        icon: "Car",
        category: "Transportation",
        impact: "80% accident reduction",
        quantum_advantage: "Real-time traffic flow optimization across smart cities",
        capabilities: &[
            "Autonomous navigation",
            "Predictive maintenance",
            "Energy efficiency optimization",
        ],
    },
    UseCase {
        id: 7,
        name: "Electronics Sector",
        description: "Semiconductor design and manufacturing optimization",
        icon: "Chip",
        category: "Technology",
        impact: "60% design efficiency",
        quantum_advantage: "Quantum circuit design and optimization",
        capabilities: &[
            "Circuit layout optimization",
            "Manufacturing process control",
            "Quality assurance automation",
        ],
    },
    UseCase {
        id: 8,
        name: "Trade & Commodity",
        description: "Global trade route and commodity price optimization",
        icon: "Globe",
        category: "Commerce",
        impact: "75% profit increase",
        quantum_advantage: "Multi-dimensional market analysis with quantum algorithms",
        capabilities: &[
            "Price prediction",
            "Trade route optimization",
            "Risk hedging strategies",
        ],
    },
    UseCase {
        id: 9,
        name: "Military & Intelligence",
        description: "Strategic intelligence and tactical optimization",
        icon: "Shield",
        category: "Defense",
        impact: "Classified advantages",
        quantum_advantage: "Quantum cryptography and secure communications",
        capabilities: &[
            "Threat assessment",
            "Resource allocation",
            "Mission planning optimization",
        ],
    },
    UseCase {
        id: 10,
        name: "Judiciary",
        description: "Legal case management and justice system optimization",
        icon: "Scale",
        category: "Legal",
        impact: "50% case resolution speed",
        quantum_advantage: "Complex legal precedent analysis and pattern recognition",
        capabilities: &[
            "Case priority optimization",
            "Resource allocation",
            "Outcome prediction modeling",
        ],
    },
    UseCase {
        id: 11,
        name: "Revenue Optimization",
        description: "Business revenue leakage detection and optimization",
        icon: "DollarSign",
        category: "Business",
        impact: "40% revenue recovery",
        quantum_advantage: "Multi-dimensional revenue stream analysis",
        capabilities: &[
            "Leak detection algorithms",
            "Pricing optimization",
            "Customer lifetime value prediction",
        ],
    },
];
