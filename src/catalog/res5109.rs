use crate::error::CatalogError;
use crate::model::Applicability::{self, Both, FinishedProduct};
use crate::model::{Category, ChecklistItem};

use super::Catalog;

pub const DEFAULT_TITLE: &str = "Informe de verificación — Rotulado general (Res. 5109/2005)";

type ItemRow = (&'static str, &'static str, &'static str, Applicability);

// Review flow: INVIMA registration, front face, back face, special cases, documents.
const RES_5109: &[(&str, &[ItemRow])] = &[
    (
        "1. Verificación con INVIMA (registro sanitario)",
        &[
            (
                "Registro sanitario impreso y legible en el empaque",
                "El número INVIMA debe estar **impreso sobre el empaque**, visible, legible e indeleble; aplica a producto terminado.",
                "Resolución 5109/2005 Art. 5.7; Decreto 3075/1997.",
                FinishedProduct,
            ),
            (
                "Registro sanitario coincide con la consulta INVIMA (nombre/denominación/marca)",
                "El rótulo debe coincidir con la ficha del registro (nombre comercial/denominación, presentaciones).",
                "Resolución 5109/2005 Art. 5.7; Decreto 3075/1997.",
                FinishedProduct,
            ),
            (
                "Registro sanitario vigente y ACTIVO",
                "Debe estar **ACTIVO** (no vencido, cancelado ni suspendido) según el portal INVIMA.",
                "Decreto 3075/1997 (control sanitario).",
                FinishedProduct,
            ),
            (
                "Denominación del alimento coincidente con el registro",
                "La denominación impresa en el rótulo debe coincidir con la reportada en la ficha INVIMA.",
                "Resolución 5109/2005 Art. 5.1; Art. 5.7.",
                FinishedProduct,
            ),
            (
                "Nombre y dirección del responsable (fabricante/importador/reenvasador)",
                "Declarar razón social y **dirección completa** del responsable.",
                "Resolución 5109/2005 Art. 5.8.",
                Both,
            ),
            (
                "País de origen",
                "Declarar “Hecho en …” o “Producto de …” cuando aplique.",
                "Resolución 5109/2005 Art. 5.9.",
                Both,
            ),
            (
                "Presentación y contenido autorizados",
                "La presentación (peso/volumen) declarada en el rótulo debe estar autorizada en el registro sanitario.",
                "Resolución 5109/2005 Art. 5.7; práctica regulatoria (INVIMA).",
                FinishedProduct,
            ),
        ],
    ),
    (
        "2. Revisión de la cara frontal",
        &[
            (
                "Denominación del alimento (verdadera naturaleza)",
                "Debe reflejar la **verdadera naturaleza** del producto; la marca **no** sustituye la denominación.",
                "Resolución 5109/2005 Art. 5.1 y 5.1.2.",
                Both,
            ),
            (
                "Marca comercial (no sustituye la denominación)",
                "La marca acompaña, pero nunca reemplaza la denominación del alimento.",
                "Resolución 5109/2005 Art. 5.1.2.",
                Both,
            ),
            (
                "Contenido neto en cara principal con unidades SI",
                "Declarar contenido neto en la **cara principal** de exhibición, usando **unidades SI** (g, kg, mL, L), legible y sin incluir el envase.",
                "Resolución 5109/2005 (Anexo de contenido neto) y Art. 3.",
                FinishedProduct,
            ),
            (
                "Lote impreso en el empaque (trazabilidad)",
                "El **lote** debe estar impreso en el empaque, legible e indeleble, para trazabilidad. **Ejemplos de formato válido (referenciales):** **L230401**, **LOT230401**, **230401A**.",
                "Resolución 5109/2005 Art. 5.4.",
                Both,
            ),
            (
                "Fecha de vencimiento / duración mínima impresa",
                "La fecha debe estar **impresa** en el empaque, legible y clara. **Ejemplos de formato válido (según caso):** **DD/MM/AAAA**, **DD-MM-AAAA**, o **MMM/AAAA** (para duración mínima).",
                "Resolución 5109/2005 Art. 5.5.",
                Both,
            ),
            (
                "Ubicación visible del rótulo (cara principal)",
                "El rótulo debe estar en la **cara visible** al consumidor, sin obstrucciones mecánicas ni pliegues que dificulten la lectura.",
                "Resolución 5109/2005 Art. 3.",
                Both,
            ),
            (
                "Afirmaciones de la cara principal no engañosas",
                "La información y recursos gráficos de portada no deben inducir a error respecto de la naturaleza, composición o cualidades del alimento.",
                "Resolución 5109/2005 Art. 4.",
                Both,
            ),
            (
                "Legibilidad de la cara principal",
                "Textos, números y símbolos en la cara frontal deben ser legibles, indelebles y con contraste adecuado.",
                "Resolución 5109/2005 Art. 4 y 6.",
                Both,
            ),
        ],
    ),
    (
        "3. Revisión de la cara posterior / información general",
        &[
            (
                "Lista de ingredientes en orden decreciente",
                "Listar **todos** los ingredientes en orden decreciente de peso al momento de fabricación (de mayor a menor).",
                "Resolución 5109/2005 Art. 5.2.",
                FinishedProduct,
            ),
            (
                "Aditivos alimentarios con función y nombre específico",
                "Declarar aditivos por **categoría funcional** y **nombre específico** (p. ej., Conservante (Sorbato de potasio)).",
                "Resolución 5109/2005 Art. 5.2.1.",
                Both,
            ),
            (
                "Ingredientes compuestos (declaración desglosada)",
                "Si se usan ingredientes compuestos (p. ej., chocolate), listar sus componentes entre paréntesis cuando corresponda.",
                "Resolución 5109/2005 Art. 5.2 (interpretación).",
                FinishedProduct,
            ),
            (
                "Aditivos con límites específicos (cuando aplique)",
                "Si el aditivo posee límites de uso, verificar su pertinencia con la ficha técnica y especificación del producto.",
                "Resolución 5109/2005 Art. 5.2.1; fichas técnicas vigentes.",
                FinishedProduct,
            ),
            (
                "Declaración de alérgenos",
                "Indicar alérgenos cuando apliquen: gluten (trigo/cebada/centeno/avena), huevo, leche (incl. lactosa), soya, maní, frutos secos, pescado, crustáceos, mostaza, apio, sésamo, sulfitos ≥10 mg/kg.",
                "Resolución 5109/2005 Art. 5.2 (interpretación y buenas prácticas).",
                FinishedProduct,
            ),
            (
                "Prioridad visual suficiente para ingredientes y alérgenos",
                "La lista de ingredientes y la declaración de alérgenos deben ser legibles, sin ser ocultadas por otros elementos gráficos.",
                "Resolución 5109/2005 Art. 4 y 6.",
                FinishedProduct,
            ),
            (
                "Condiciones de conservación (cuando corresponda)",
                "Declarar condiciones especiales de conservación para preservar inocuidad y vida útil (p. ej., “Manténgase refrigerado a 4 °C”).",
                "Resolución 5109/2005 Art. 5.6.",
                FinishedProduct,
            ),
            (
                "Instrucciones de uso/preparación (cuando corresponda)",
                "Incluir instrucciones necesarias para el uso seguro y adecuado del producto (p. ej., “Agítese antes de usar”).",
                "Resolución 5109/2005 Art. 5.6.",
                FinishedProduct,
            ),
            (
                "Idioma en español (rótulo complementario si es importado)",
                "Toda la información obligatoria debe estar **en español**; para importados se permite **rótulo complementario** adherido con la traducción completa.",
                "Resolución 5109/2005 Art. 5.",
                Both,
            ),
            (
                "No inducir a error (cara posterior)",
                "La información posterior tampoco debe inducir a error sobre la naturaleza/composición/beneficios del alimento.",
                "Resolución 5109/2005 Art. 4.",
                Both,
            ),
            (
                "Legibilidad e indelebilidad general",
                "Textos, cifras y símbolos deben ser indelebles, con contraste suficiente y legibles en condiciones normales de compra.",
                "Resolución 5109/2005 Art. 4 y 6.",
                Both,
            ),
            (
                "Ubicación del rótulo (información posterior)",
                "La información debe estar dispuesta en zonas visibles y accesibles del envase.",
                "Resolución 5109/2005 Art. 3.",
                Both,
            ),
        ],
    ),
    (
        "4. Condiciones particulares",
        &[
            (
                "Producto importado — rótulo complementario",
                "Si la etiqueta original no está en español o falta información obligatoria, adherir rótulo complementario con los datos exigidos.",
                "Resolución 5109/2005 Art. 5 (español).",
                FinishedProduct,
            ),
            (
                "Producto reenvasado (en establecimiento autorizado)",
                "Conservar la información original e incluir **responsable del reenvasado** con dirección.",
                "Resolución 5109/2005 Art. 3 y 4; Decreto 3075/1997.",
                FinishedProduct,
            ),
            (
                "Venta a granel / fraccionados",
                "Exhibir información mínima mediante rótulos/carteles (denominación, ingredientes cuando aplique, responsable, país de origen, lote/fecha en envase inmediato, etc.).",
                "Resolución 5109/2005 (principios de información al consumidor).",
                FinishedProduct,
            ),
            (
                "Envases muy pequeños (limitaciones de espacio)",
                "Si el área impide toda la información, usar medios complementarios (pliegos, insertos, rótulos adicionales) sin omitir lo esencial.",
                "Criterio práctico alineado con 5109/2005 (visibilidad/legibilidad).",
                FinishedProduct,
            ),
            (
                "Multipacks o envases secundarios",
                "Cuando aplique, el envase secundario debe repetir la información esencial o remitir claramente a la existente en el envase primario.",
                "Criterio práctico y lineamientos de información al consumidor.",
                FinishedProduct,
            ),
            (
                "Promociones/obsequios adheridos",
                "Evitar que elementos promocionales oculten información obligatoria del rótulo.",
                "Resolución 5109/2005 Art. 4 (no inducir a error) y Art. 6 (legibilidad).",
                FinishedProduct,
            ),
        ],
    ),
    (
        "5. Evidencia documental y control",
        &[
            (
                "Soportes regulatorios disponibles",
                "Disponer de registro sanitario, contratos de maquila/reenvasado, certificados de origen y demás soportes.",
                "Decreto 3075/1997 (habilitación y control).",
                Both,
            ),
            (
                "Fichas técnicas y especificaciones",
                "Fichas de materias primas y producto final actualizadas, coherentes con lo declarado.",
                "Buenas prácticas de calidad.",
                Both,
            ),
            (
                "Control de cambios del arte de etiqueta",
                "Historial de versiones y aprobaciones internas del arte del rótulo.",
                "Buenas prácticas documentales.",
                Both,
            ),
            (
                "Coherencia documental vs rótulo",
                "La información del rótulo debe ser coherente con fichas técnicas, especificaciones, acuerdos con proveedor y análisis disponibles.",
                "Buenas prácticas de aseguramiento de calidad.",
                Both,
            ),
            (
                "Evidencia de revisión periódica de artes",
                "Demostrar revisión periódica (y tras cambios regulatorios) de los artes de etiqueta antes de impresión/lanzamiento.",
                "Buenas prácticas de cumplimiento regulatorio.",
                Both,
            ),
        ],
    ),
];

/// General-labeling checklist for Resolución 5109 de 2005.
pub fn builtin() -> Result<Catalog, CatalogError> {
    let categories = RES_5109
        .iter()
        .map(|(name, rows)| Category {
            name: (*name).to_string(),
            items: rows
                .iter()
                .map(|&(id, verification_text, legal_reference, applicability)| {
                    ChecklistItem::new(id, verification_text, legal_reference, applicability)
                })
                .collect(),
        })
        .collect();

    Catalog::new(DEFAULT_TITLE, categories)
}
