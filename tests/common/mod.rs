// Shared fixtures for qametrics integration tests
#![allow(dead_code)]

use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};

/// Three discovery days: two defects on 03-01, one critical production
/// defect on 03-02 and a resolved one on 03-03.
pub const SAMPLE_DATASET: &str = indoc! {"
    defecto_id,fecha,modulo,severidad,tipo,estado,reportado_por,dias_abierto,prioridad,ambiente,ciclo,version
    D0001,2024-03-01,Reservas,Medio,Funcional,Abierto,Ana Ruiz,2,P3,QA,Sprint 1,v1.0
    D0002,2024-03-01,Busqueda,Bajo,UI,En progreso,Luis Paz,1,P4,QA,Sprint 1,v1.0
    D0003,2024-03-02,Pagos,Critico,Funcional,Abierto,Ana Ruiz,4,P1,Produccion,Sprint 1,v1.0
    D0004,2024-03-03,Reservas,Alto,Datos,Resuelto,Marta Gil,3,P2,Staging,Sprint 2,v1.1
"};

pub fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("defects.csv");
    fs::write(&path, SAMPLE_DATASET).unwrap();
    path
}
