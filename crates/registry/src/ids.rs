//! Dense integer identifiers for every key the registry and assembler index
//! by. Couplings and production terms store these, not string keys, so the
//! ODE assembler's inner loop is array-indexed rather than hash-indexed.

/// Declares a field-less enum plus a dense index, a `COUNT`, and an `ALL`
/// array — the "array-of-structs indexed by a dense integer" representation
/// called for by the registry's design notes.
macro_rules! dense_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const COUNT: usize = Self::ALL.len();

            pub const fn index(self) -> usize {
                self as usize
            }

            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

dense_enum!(SignalId {
    Cortisol,
    Melatonin,
    Dopamine,
    Serotonin,
    Norepinephrine,
    Epinephrine,
    Glucose,
    Insulin,
    Glucagon,
    Testosterone,
    Estrogen,
    Progesterone,
    Lh,
    Fsh,
    Leptin,
    Ghrelin,
    Oxytocin,
    Vasopressin,
    GrowthHormone,
    Tsh,
    T3,
    T4,
    HeartRate,
    SystolicBp,
    DiastolicBp,
    CoreTemperature,
    Acetylcholine,
    Histamine,
    Orexin,
    Triglycerides,
    LdlCholesterol,
    HdlCholesterol,
    Lactate,
    Ethanol,
});

dense_enum!(AuxId {
    CrhPool,
    ActhPool,
    DopamineVesicles,
    NorepinephrineVesicles,
    SerotoninPool,
    AdenosinePressure,
    HepaticGlycogen,
    MuscleGlycogen,
    InsulinAction,
    GnrhPulse,
    CoreTempDrive,
    HungerDrive,
});

dense_enum!(AccumulatorId {
    CortisolIntegral,
    SleepDebt,
});

dense_enum!(ReceptorId {
    GabaA,
    DopamineD2,
    SerotoninFiveHt2a,
    AdenosineA2a,
    AdrenergicBeta1,
    OpioidMu,
    InsulinReceptor,
});

dense_enum!(TransporterId {
    DopamineTransporter,
    NorepinephrineTransporter,
    SerotoninTransporter,
    Glut4,
});

dense_enum!(EnzymeId {
    Cyp3a4,
    Cyp1a2,
    Cyp2d6,
    MonoamineOxidaseA,
    AlcoholDehydrogenase,
    Comt,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_ordered() {
        for (i, id) in SignalId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
        assert_eq!(SignalId::COUNT, 34);
        assert_eq!(AuxId::COUNT, 12);
        assert_eq!(AccumulatorId::COUNT, 2);
    }

    #[test]
    fn keys_are_stable_identifiers() {
        assert_eq!(SignalId::Cortisol.key(), "Cortisol");
    }
}
