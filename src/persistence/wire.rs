//! Formato JSON del snapshot guardado (claves en portugués, como los datos
//! existentes). Los flags opcionales pueden faltar en datos antiguos.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::locks::expected_lock;
use crate::model::{Lesson, LessonId, Module, ModuleId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LessonRecord {
    pub id: LessonId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "videoUrl")]
    pub video_ref: String,
    #[serde(rename = "assistida", default)]
    pub watched: bool,
    #[serde(rename = "bloqueado", default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModuleRecord {
    pub id: ModuleId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "capa", default)]
    pub cover: String,
    #[serde(rename = "linha", default)]
    pub track: String,
    #[serde(rename = "bloqueado", default)]
    pub locked: bool,
    #[serde(rename = "aulas", default)]
    pub lessons: Vec<LessonRecord>,
}

impl From<&Module> for ModuleRecord {
    fn from(m: &Module) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            cover: m.cover.clone(),
            track: m.track.clone(),
            locked: m.locked,
            lessons: m
                .lessons
                .iter()
                .map(|l| LessonRecord {
                    id: l.id,
                    title: l.title.clone(),
                    video_ref: l.video_ref.clone(),
                    watched: l.watched,
                    locked: Some(l.locked),
                })
                .collect(),
        }
    }
}

impl From<ModuleRecord> for Module {
    /// Una aula sin `bloqueado` recibe el valor derivado de la cadena.
    fn from(rec: ModuleRecord) -> Self {
        let mut prev_watched = None;
        let lessons = rec
            .lessons
            .into_iter()
            .map(|l| {
                let locked = l.locked.unwrap_or_else(|| expected_lock(prev_watched));
                prev_watched = Some(l.watched);
                Lesson {
                    id: l.id,
                    title: l.title,
                    video_ref: l.video_ref,
                    watched: l.watched,
                    locked,
                }
            })
            .collect();
        Module {
            id: rec.id,
            name: rec.name,
            cover: rec.cover,
            track: rec.track,
            locked: rec.locked,
            lessons,
        }
    }
}

pub fn encode(modules: &[Module]) -> serde_json::Result<String> {
    let records: Vec<ModuleRecord> = modules.iter().map(ModuleRecord::from).collect();
    serde_json::to_string(&records)
}

/// Decodifica y valida un snapshot. Devuelve el motivo si no sirve.
pub fn decode(text: &str) -> Result<Vec<Module>, String> {
    let records: Vec<ModuleRecord> = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let modules: Vec<Module> = records.into_iter().map(Module::from).collect();
    check_unique_ids(&modules)?;
    Ok(modules)
}

fn check_unique_ids(modules: &[Module]) -> Result<(), String> {
    let mut module_ids = HashSet::new();
    for m in modules {
        if !module_ids.insert(m.id) {
            return Err(format!("id de módulo repetido: {}", m.id));
        }
        let mut lesson_ids = HashSet::new();
        for l in &m.lessons {
            if !lesson_ids.insert(l.id) {
                return Err(format!("id de aula {} repetido en el módulo {}", l.id, m.id));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_with_missing_optional_flags() {
        let text = r#"[{"id":5,"nome":"M","capa":"c","linha":"L","aulas":[
            {"id":1,"titulo":"A","videoUrl":"v1","assistida":true},
            {"id":2,"titulo":"B","videoUrl":"v2"},
            {"id":3,"titulo":"C","videoUrl":"v3","bloqueado":false}
        ]}]"#;
        let modules = decode(text).expect("decode ok");
        let m = &modules[0];
        assert!(!m.locked);
        assert!(!m.lessons[0].locked);
        assert!(!m.lessons[1].locked);
        assert!(!m.lessons[1].watched);
        // guardado explícito gana a la derivación
        assert!(!m.lessons[2].locked);
    }

    #[test]
    fn writes_portuguese_keys() {
        let modules = vec![Module {
            id: 1,
            name: "Módulo 1".into(),
            cover: "c.png".into(),
            track: "Linha A".into(),
            locked: true,
            lessons: vec![Lesson {
                id: 2,
                title: "Aula".into(),
                video_ref: "v".into(),
                watched: true,
                locked: false,
            }],
        }];
        let json = encode(&modules).expect("encode ok");
        for key in ["\"nome\"", "\"capa\"", "\"linha\"", "\"bloqueado\"", "\"aulas\"", "\"titulo\"", "\"videoUrl\"", "\"assistida\""] {
            assert!(json.contains(key), "falta {key} en {json}");
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let text = r#"[{"id":1,"nome":"A","aulas":[]},{"id":1,"nome":"B","aulas":[]}]"#;
        assert!(decode(text).is_err());
        let text = r#"[{"id":1,"nome":"A","aulas":[
            {"id":4,"titulo":"x","videoUrl":"v"},{"id":4,"titulo":"y","videoUrl":"v"}]}]"#;
        assert!(decode(text).is_err());
    }

    #[test]
    fn non_array_payload_is_rejected() {
        assert!(decode("{\"nome\":\"x\"}").is_err());
        assert!(decode("not json").is_err());
    }
}
